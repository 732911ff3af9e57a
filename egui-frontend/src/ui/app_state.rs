//! # App State Module
//!
//! Central application state for the financial dashboard.
//!
//! ## Key Types:
//! - `FinancialDashboardApp` - Main application state struct
//!
//! ## State Management:
//! Data is loaded once from a `DashboardDataSource` when the app is created.
//! Metrics and the view model are derived from it right away and never change
//! afterwards, so every frame draws the same view.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use shared::metrics::percentages_consistent;
use shared::{DashboardDataSource, DashboardMetrics};

use crate::config::DashboardConfig;
use crate::ui::components::donut_chart::DonutChart;
use crate::ui::mappers::DashboardView;

/// Allowed gap between stored and computed category percentages
const PERCENTAGE_TOLERANCE: f64 = 0.05;

/// Main application struct for the egui financial dashboard
pub struct FinancialDashboardApp {
    pub view: DashboardView,
    pub donut: DonutChart,
    /// Non-fatal problem shown as a banner (e.g. unreadable config file)
    pub warning_message: Option<String>,
}

impl FinancialDashboardApp {
    /// Create a new app, loading everything from `source`
    pub fn new(
        config: &DashboardConfig,
        source: &dyn DashboardDataSource,
        warning_message: Option<String>,
    ) -> Result<Self> {
        info!("🚀 Initializing FinancialDashboardApp");

        let data = source
            .load_dashboard()
            .context("Failed to load dashboard data")?;

        if !percentages_consistent(&data.expense_categories, PERCENTAGE_TOLERANCE) {
            warn!("Stored category percentages don't match computed shares of total spending");
        }

        let metrics = DashboardMetrics::compute(&data, config.monthly_budget);
        info!(
            "📊 Total spent ${:.2} of ${:.2} budget ({:.1}% used)",
            metrics.total_spent,
            metrics.monthly_budget.amount(),
            metrics.budget_used
        );

        let view = DashboardView::build(&config.title, &data, &metrics);
        let donut = DonutChart::new(view.donut_slices(), view.total_spent_label.clone());
        debug!("Category donut laid out with {} segments", donut.segments().len());

        Ok(Self {
            view,
            donut,
            warning_message,
        })
    }

    pub fn dismiss_warning(&mut self) {
        self.warning_message = None;
    }
}

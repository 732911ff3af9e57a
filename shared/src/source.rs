//! # Data Source
//!
//! Abstraction over where the dashboard data comes from. The view only depends on
//! this trait, so a real backend can replace the fixture tables without touching
//! any rendering code.

use anyhow::Result;
use log::debug;

use crate::{
    fixtures, Alert, DashboardData, ExpenseCategory, MonthlySpendingPoint, SavingsGoal,
    SpendingComparison, WeeklySpendingPoint,
};

/// Trait defining read access to the dashboard datasets
pub trait DashboardDataSource {
    /// Monthly actual vs. predicted spending, in calendar order
    fn fetch_monthly_spending(&self) -> Result<Vec<MonthlySpendingPoint>>;

    fn fetch_expense_categories(&self) -> Result<Vec<ExpenseCategory>>;

    fn fetch_savings_goals(&self) -> Result<Vec<SavingsGoal>>;

    fn fetch_alerts(&self) -> Result<Vec<Alert>>;

    /// Weekly spending for the active month, in week order
    fn fetch_weekly_spending(&self) -> Result<Vec<WeeklySpendingPoint>>;

    fn fetch_spending_comparison(&self) -> Result<SpendingComparison>;

    /// Load every dataset at once
    fn load_dashboard(&self) -> Result<DashboardData> {
        let data = DashboardData {
            monthly_spending: self.fetch_monthly_spending()?,
            expense_categories: self.fetch_expense_categories()?,
            savings_goals: self.fetch_savings_goals()?,
            alerts: self.fetch_alerts()?,
            weekly_spending: self.fetch_weekly_spending()?,
            spending_comparison: self.fetch_spending_comparison()?,
        };
        debug!(
            "Loaded dashboard data: {} months, {} categories, {} goals, {} alerts, {} weeks",
            data.monthly_spending.len(),
            data.expense_categories.len(),
            data.savings_goals.len(),
            data.alerts.len(),
            data.weekly_spending.len()
        );
        Ok(data)
    }
}

/// Serves the built-in sample tables. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureDataSource;

impl DashboardDataSource for FixtureDataSource {
    fn fetch_monthly_spending(&self) -> Result<Vec<MonthlySpendingPoint>> {
        Ok(fixtures::monthly_spending())
    }

    fn fetch_expense_categories(&self) -> Result<Vec<ExpenseCategory>> {
        Ok(fixtures::expense_categories())
    }

    fn fetch_savings_goals(&self) -> Result<Vec<SavingsGoal>> {
        Ok(fixtures::savings_goals())
    }

    fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        Ok(fixtures::alerts())
    }

    fn fetch_weekly_spending(&self) -> Result<Vec<WeeklySpendingPoint>> {
        Ok(fixtures::weekly_spending())
    }

    fn fetch_spending_comparison(&self) -> Result<SpendingComparison> {
        Ok(fixtures::spending_comparison())
    }
}

//! # App Coordinator Module
//!
//! The main update loop: sets up styling, paints the background and lays out
//! every dashboard section in a single scrollable column.
//!
//! ## Layout (top to bottom):
//! 1. Header
//! 2. Budget alerts
//! 3. Metric cards (3 columns)
//! 4. Spending trend + expense category donut (2 columns)
//! 5. Category breakdown + savings goals (2 columns)
//! 6. Weekly spending analysis
//!
//! Rows collapse to one column on narrow windows.

use eframe::egui;

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::styling::{draw_gradient_background, setup_dashboard_style};
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::{draw_grid, draw_section_card};

/// Widest the content column gets on large screens
const MAX_CONTENT_WIDTH: f32 = 1280.0;
const SECTION_SPACING: f32 = 16.0;

impl eframe::App for FinancialDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_dashboard_style(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let full_rect = ui.max_rect();
            draw_gradient_background(ui, full_rect);

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width().min(MAX_CONTENT_WIDTH);
                    let side = ((ui.available_width() - width) / 2.0).max(0.0);

                    ui.horizontal(|ui| {
                        ui.add_space(side);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            self.render_dashboard(ui);
                        });
                    });
                });
        });
    }
}

impl FinancialDashboardApp {
    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        self.render_header(ui);
        ui.add_space(SECTION_SPACING);

        self.render_messages(ui);

        self.draw_alerts_card(ui);
        ui.add_space(SECTION_SPACING);

        self.draw_metric_cards(ui);

        draw_grid(ui, 2, 2, |ui, index| match index {
            0 => draw_section_card(
                ui,
                "Spending Trend & Predictions",
                Some("AI-powered spending forecasts"),
                |ui| self.draw_spending_trend_chart(ui),
            ),
            _ => self.draw_category_donut_card(ui),
        });

        draw_grid(ui, 2, 2, |ui, index| match index {
            0 => self.draw_category_breakdown_card(ui),
            _ => self.draw_savings_goals_card(ui),
        });

        draw_section_card(
            ui,
            "Weekly Spending Analysis",
            Some("Current month breakdown"),
            |ui| self.draw_weekly_spending_chart(ui),
        );
        ui.add_space(24.0);
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(&self.view.title)
                    .font(egui::FontId::new(36.0, egui::FontFamily::Proportional))
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.label(
                egui::RichText::new(&self.view.subtitle)
                    .font(egui::FontId::new(17.0, egui::FontFamily::Proportional))
                    .color(colors::TEXT_MUTED),
            );
        });
    }

    /// Render the warning banner, if any
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.warning_message.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Frame::none()
            .fill(CURRENT_THEME.severity.warning_fill)
            .stroke(egui::Stroke::new(1.0, CURRENT_THEME.severity.warning_border))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("⚠ {}", message)).color(colors::TEXT_HEADING));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismissed = ui.small_button("✖").clicked();
                    });
                });
            });
        ui.add_space(SECTION_SPACING);

        if dismissed {
            self.dismiss_warning();
        }
    }
}

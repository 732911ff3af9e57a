//! # Alert List Module
//!
//! Renders the "Budget Alerts" card. Each alert row is tinted with the
//! treatment picked for its kind in the view model.

use eframe::egui;

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::{draw_badge, draw_section_card};
use crate::ui::mappers::AlertRow;

impl FinancialDashboardApp {
    pub fn draw_alerts_card(&self, ui: &mut egui::Ui) {
        draw_section_card(ui, "🔔 Budget Alerts", None, |ui| {
            if self.view.alerts.is_empty() {
                ui.label(egui::RichText::new("No alerts this month").color(colors::TEXT_MUTED));
                return;
            }
            for alert in &self.view.alerts {
                draw_alert_row(ui, alert);
                ui.add_space(4.0);
            }
        });
    }
}

fn draw_alert_row(ui: &mut egui::Ui, alert: &AlertRow) {
    egui::Frame::none()
        .fill(alert.treatment.fill)
        .stroke(egui::Stroke::new(1.0, alert.treatment.border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                ui.label(egui::RichText::new("⚠").size(16.0).color(alert.treatment.icon))
                    .on_hover_text(alert.kind.to_string());
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&alert.message).size(14.0).strong());
                    draw_badge(ui, &alert.category);
                });
            });
        });
}

//! # Category Breakdown Module
//!
//! Expense category panels: the donut chart and the detailed list with a
//! color swatch, stored share and amount per category.

use eframe::egui;

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::chart_renderer::CHART_HEIGHT;
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::draw_section_card;
use crate::ui::mappers::CategoryRow;

impl FinancialDashboardApp {
    pub fn draw_category_donut_card(&self, ui: &mut egui::Ui) {
        draw_section_card(
            ui,
            "Expense Categories",
            Some("Automated categorization breakdown"),
            |ui| self.donut.render(ui, CHART_HEIGHT),
        );
    }

    pub fn draw_category_breakdown_card(&self, ui: &mut egui::Ui) {
        draw_section_card(ui, "Category Breakdown", Some("Detailed spending analysis"), |ui| {
            for row in &self.view.categories {
                draw_category_row(ui, row);
                ui.add_space(4.0);
            }
        });
    }
}

fn draw_category_row(ui: &mut egui::Ui, row: &CategoryRow) {
    egui::Frame::none()
        .fill(colors::MUTED_ROW)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (swatch, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().circle_filled(swatch.center(), 8.0, row.color);

                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&row.name).strong());
                    ui.label(egui::RichText::new(&row.share_label).size(13.0).color(colors::TEXT_MUTED));
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&row.amount_label).strong());
                });
            });
        });
}

//! # Metric Cards Module
//!
//! The row of key figures under the alerts: monthly spending, budget used and
//! the headline savings goal.

use eframe::egui;

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::goal_progress_bar::{draw_progress_bar, fill_fraction, ProgressBarConfig};
use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::components::ui_components::draw_grid;
use crate::ui::mappers::MetricCard;

impl FinancialDashboardApp {
    pub fn draw_metric_cards(&self, ui: &mut egui::Ui) {
        let cards = &self.view.metric_cards;
        draw_grid(ui, cards.len(), 3, |ui, index| draw_metric_card(ui, &cards[index]));
    }
}

fn draw_metric_card(ui: &mut egui::Ui, card: &MetricCard) {
    card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&card.title).size(13.0).color(colors::TEXT_MUTED));
                let mut value = egui::RichText::new(&card.value).size(26.0).strong();
                if let Some(color) = card.value_color {
                    value = value.color(color);
                }
                ui.label(value);

                if let Some(percent) = card.progress {
                    ui.add_space(4.0);
                    ui.set_max_width(180.0);
                    draw_progress_bar(ui, fill_fraction(percent), &ProgressBarConfig::budget());
                }

                if let Some(caption) = &card.caption {
                    let color = CURRENT_THEME.tone_color(caption.tone);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(caption.icon).color(color));
                        ui.label(egui::RichText::new(&caption.text).size(13.0).color(color));
                    });
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(card.icon).size(30.0).color(card.icon_color));
            });
        });
    });
}

//! # Goal Renderer Module
//!
//! Renders the "Savings Goals" card: one block per goal with its deadline,
//! saved vs. target amounts, a progress bar, the completion percentage and the
//! amount still to save.
//!
//! The percentage label shows the real value, so an over-funded goal reads
//! e.g. "125.0% complete" while its bar stays full.

use eframe::egui;

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::goal_progress_bar::{draw_progress_bar, ProgressBarConfig};
use crate::ui::components::theme::colors;
use crate::ui::components::ui_components::draw_section_card;
use crate::ui::mappers::GoalRow;

impl FinancialDashboardApp {
    pub fn draw_savings_goals_card(&self, ui: &mut egui::Ui) {
        draw_section_card(ui, "🎯 Savings Goals", Some("Track your financial objectives"), |ui| {
            if self.view.goals.is_empty() {
                ui.label(egui::RichText::new("No savings goals yet").color(colors::TEXT_MUTED));
                return;
            }
            for goal in &self.view.goals {
                draw_goal(ui, goal);
                ui.add_space(12.0);
            }
        });
    }
}

fn draw_goal(ui: &mut egui::Ui, goal: &GoalRow) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&goal.name).strong());
            ui.label(egui::RichText::new(&goal.due_label).size(13.0).color(colors::TEXT_MUTED));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&goal.current_label).strong());
                ui.label(egui::RichText::new(&goal.target_label).size(13.0).color(colors::TEXT_MUTED));
            });
        });
    });

    draw_progress_bar(ui, goal.fill, &ProgressBarConfig::default());
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&goal.progress_label).size(12.0).color(colors::TEXT_MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let color = if goal.complete { colors::SUCCESS } else { colors::TEXT_MUTED };
            ui.label(egui::RichText::new(&goal.status_label).size(12.0).color(color));
        });
    });
}

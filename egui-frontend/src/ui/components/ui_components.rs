//! # UI Components Module
//!
//! Reusable helpers for drawing common dashboard elements.
//!
//! ## Key Functions:
//! - `draw_section_card()` - Card with a title, optional description and content
//! - `draw_badge()` - Small rounded label
//! - `grid_columns()` - Responsive column count for a row of cards

use eframe::egui;

use crate::ui::components::styling::card_frame;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Below this width every card row collapses to a single column
pub const SINGLE_COLUMN_BREAKPOINT: f32 = 900.0;

/// Number of columns to use for a row that wants `wide_columns` on a wide screen
pub fn grid_columns(available_width: f32, wide_columns: usize) -> usize {
    if available_width < SINGLE_COLUMN_BREAKPOINT {
        1
    } else {
        wide_columns.max(1)
    }
}

/// Draw a card with a heading and optional description above its content
pub fn draw_section_card<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    card_frame()
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(title)
                    .size(18.0)
                    .strong()
                    .color(colors::TEXT_HEADING),
            );
            if let Some(description) = description {
                ui.label(egui::RichText::new(description).size(13.0).color(colors::TEXT_MUTED));
            }
            ui.add_space(12.0);
            add_contents(ui)
        })
        .inner
}

/// Small rounded badge with muted text, like a category tag
pub fn draw_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.badge_background)
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(colors::TEXT_HEADING));
        });
}

/// Lay out `count` items in rows of `columns`, calling `add_item(ui, index)` for each
pub fn draw_grid(ui: &mut egui::Ui, count: usize, wide_columns: usize, mut add_item: impl FnMut(&mut egui::Ui, usize)) {
    let columns = grid_columns(ui.available_width(), wide_columns);
    let mut index = 0;
    while index < count {
        let row_len = columns.min(count - index);
        ui.columns(columns, |cols| {
            for (offset, col) in cols.iter_mut().enumerate().take(row_len) {
                add_item(col, index + offset);
            }
        });
        index += row_len;
        ui.add_space(16.0);
    }
}

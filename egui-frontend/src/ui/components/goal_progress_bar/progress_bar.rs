//! Progress Bar Component
//!
//! Slim rounded bar used by the "Budget Used" card and the savings goals list.
//! Percentages are turned into a fill with `fill_fraction`, which clamps to the
//! bar while any text label keeps showing the real value.

use eframe::egui;

use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Configuration for progress bar appearance
#[derive(Debug, Clone)]
pub struct ProgressBarConfig {
    pub height: f32,
    pub rounding: f32,
    pub fill_color: egui::Color32,
    /// Fill used once the value reaches 100%
    pub fill_color_complete: egui::Color32,
    pub background_color: egui::Color32,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            height: 8.0,
            rounding: 4.0,
            fill_color: colors::PRIMARY,
            fill_color_complete: colors::SUCCESS,
            background_color: CURRENT_THEME.chart.track,
        }
    }
}

impl ProgressBarConfig {
    /// Budget bars turn amber instead of green when they fill up
    pub fn budget() -> Self {
        Self {
            fill_color_complete: colors::WARNING,
            ..Self::default()
        }
    }
}

/// Fraction of the bar to fill for a percentage, clamped to `0.0..=1.0`
pub fn fill_fraction(percent: f64) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    (percent / 100.0).clamp(0.0, 1.0) as f32
}

/// Draw a progress bar spanning the available width, `fraction` in 0..=1
pub fn draw_progress_bar(ui: &mut egui::Ui, fraction: f32, config: &ProgressBarConfig) -> egui::Response {
    let fraction = fraction.clamp(0.0, 1.0);
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), config.height),
        egui::Sense::hover(),
    );
    let rounding = egui::Rounding::same(config.rounding);

    ui.painter().rect_filled(rect, rounding, config.background_color);

    if fraction > 0.0 {
        let fill_color = if fraction >= 1.0 {
            config.fill_color_complete
        } else {
            config.fill_color
        };
        let filled_rect = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * fraction, rect.height()),
        );
        ui.painter().rect_filled(filled_rect, rounding, fill_color);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_fraction_in_range() {
        assert_eq!(fill_fraction(0.0), 0.0);
        assert_eq!(fill_fraction(75.0), 0.75);
        assert_eq!(fill_fraction(100.0), 1.0);
    }

    #[test]
    fn test_fill_fraction_is_clamped() {
        assert_eq!(fill_fraction(150.0), 1.0);
        assert_eq!(fill_fraction(-20.0), 0.0);
        assert_eq!(fill_fraction(f64::NAN), 0.0);
        assert_eq!(fill_fraction(f64::INFINITY), 1.0);
    }
}

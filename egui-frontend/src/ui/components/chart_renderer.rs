//! # Chart Renderer Module
//!
//! Plots for the dashboard, drawn with `egui_plot`.
//!
//! ## Key Functions:
//! - `draw_spending_trend_chart()` - Actual vs. predicted monthly spending lines
//! - `draw_weekly_spending_chart()` - Weekly spending bars
//! - `axis_label()` - Map an x position back to its category label
//!
//! Both plots use category x axes: point `i` sits at `x = i` and the axis shows
//! the label instead of the number. Zoom and drag are disabled so the dashboard
//! stays static.

use eframe::egui;
use egui_plot::{
    Bar, BarChart, GridMark, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points,
};

use crate::ui::app_state::FinancialDashboardApp;
use crate::ui::components::styling::lerp_color;
use crate::ui::components::theme::{colors, CURRENT_THEME};
use crate::ui::formatting::{format_currency, format_plain_currency};
use crate::ui::mappers::ChartSeries;

pub const CHART_HEIGHT: f32 = 300.0;

/// Label for an x position, if it lands on a whole category index
pub fn axis_label(labels: &[String], value: f64) -> Option<&str> {
    if value < 0.0 || (value - value.round()).abs() > 1e-6 {
        return None;
    }
    labels.get(value.round() as usize).map(String::as_str)
}

fn series_points(series: &ChartSeries) -> Vec<[f64; 2]> {
    series
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| [i as f64, *value])
        .collect()
}

/// Headroom above the largest value so the top marker isn't clipped
fn padded_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    max * 1.1
}

/// One grid line per category
fn category_grid(count: usize) -> impl Fn(egui_plot::GridInput) -> Vec<GridMark> {
    move |_input| {
        (0..count)
            .map(|i| GridMark {
                value: i as f64,
                step_size: 1.0,
            })
            .collect()
    }
}

fn static_plot(id: &str, labels: Vec<String>) -> Plot {
    let count = labels.len();
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_background(false)
        .include_y(0.0)
        .include_x(-0.5)
        .include_x(count as f64 - 0.5)
        .x_grid_spacer(category_grid(count))
        .x_axis_formatter(move |mark, _range| {
            axis_label(&labels, mark.value).unwrap_or_default().to_string()
        })
        .y_axis_formatter(|mark, _range| format_currency(mark.value))
}

impl FinancialDashboardApp {
    /// Spending trend: solid actual line and dashed prediction line
    pub fn draw_spending_trend_chart(&self, ui: &mut egui::Ui) {
        let actual = &self.view.actual_spending;
        let predicted = &self.view.predicted_spending;
        if actual.values.is_empty() {
            ui.label(egui::RichText::new("No spending history").color(colors::TEXT_MUTED));
            return;
        }

        let actual_points = series_points(actual);
        let predicted_points = series_points(predicted);

        let actual_line = Line::new(PlotPoints::from(actual_points.clone()))
            .name("Actual Spending")
            .color(colors::PRIMARY)
            .width(3.0);
        let actual_markers = Points::new(PlotPoints::from(actual_points))
            .color(colors::PRIMARY)
            .filled(true)
            .radius(4.0)
            .shape(MarkerShape::Circle);

        let predicted_line = Line::new(PlotPoints::from(predicted_points.clone()))
            .name("AI Prediction")
            .color(colors::SECONDARY)
            .width(2.0)
            .style(LineStyle::Dashed { length: 5.0 });
        let predicted_markers = Points::new(PlotPoints::from(predicted_points))
            .color(colors::SECONDARY)
            .filled(true)
            .radius(4.0)
            .shape(MarkerShape::Circle);

        let y_max = padded_max(actual.values.iter().chain(&predicted.values).copied());
        let tooltip_labels = actual.labels.clone();

        static_plot("spending_trend_chart", actual.labels.clone())
            .legend(Legend::default())
            .include_y(y_max)
            .label_formatter(move |name, value| {
                // Only named lines get a tooltip
                if name.is_empty() {
                    return String::new();
                }
                match axis_label(&tooltip_labels, value.x.round()) {
                    Some(month) => format!("{}\n{}: {}", month, name, format_plain_currency(value.y.round())),
                    None => format!("{}: {}", name, format_plain_currency(value.y.round())),
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(actual_line);
                plot_ui.points(actual_markers);
                plot_ui.line(predicted_line);
                plot_ui.points(predicted_markers);
            });
    }

    /// Weekly bars, shaded from primary to secondary
    pub fn draw_weekly_spending_chart(&self, ui: &mut egui::Ui) {
        let weekly = &self.view.weekly_spending;
        if weekly.values.is_empty() {
            ui.label(egui::RichText::new("No weekly data").color(colors::TEXT_MUTED));
            return;
        }

        let last = weekly.values.len().saturating_sub(1).max(1) as f32;
        let bars: Vec<Bar> = weekly
            .values
            .iter()
            .zip(&weekly.labels)
            .enumerate()
            .map(|(i, (amount, label))| {
                let color = lerp_color(
                    CURRENT_THEME.brand.primary,
                    CURRENT_THEME.brand.secondary,
                    i as f32 / last,
                );
                Bar::new(i as f64, *amount)
                    .width(0.6)
                    .name(label)
                    .fill(color)
            })
            .collect();

        let chart = BarChart::new(bars)
            .name("Amount")
            .element_formatter(Box::new(|bar, _chart| {
                format!("{}\nAmount: {}", bar.name, format_plain_currency(bar.value))
            }));

        static_plot("weekly_spending_chart", weekly.labels.clone())
            .include_y(padded_max(weekly.values.iter().copied()))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}

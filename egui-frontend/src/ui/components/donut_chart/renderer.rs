//! # Donut Chart Renderer
//!
//! Draws the expense category donut with egui painting primitives. Each
//! segment is a thick arc stroked along the middle of the ring. Hovering a
//! segment highlights it and shows its amount in a tooltip.

use eframe::egui;

use super::calculations::{
    calculate_segments, point_on_circle, segment_at, DonutSegment, DonutSlice,
};
use crate::ui::components::styling::lerp_color;
use crate::ui::components::theme::colors;
use crate::ui::formatting::format_plain_currency;

/// How far a hovered segment moves out from the center
const HOVER_OFFSET: f32 = 4.0;

/// Configuration for donut appearance
#[derive(Debug, Clone)]
pub struct DonutChartConfig {
    pub outer_radius: f32,
    /// Radius of the hole
    pub inner_radius: f32,
    /// Gap between neighbouring segments, in degrees
    pub padding_degrees: f32,
    pub center_font_size: f32,
    pub secondary_font_size: f32,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            outer_radius: 120.0,
            inner_radius: 60.0,
            padding_degrees: 2.0,
            center_font_size: 20.0,
            secondary_font_size: 12.0,
        }
    }
}

/// Category donut with cached segment layout
#[derive(Debug)]
pub struct DonutChart {
    config: DonutChartConfig,
    slices: Vec<DonutSlice>,
    segments: Vec<DonutSegment>,
    center_text: String,
}

impl DonutChart {
    pub fn new(slices: Vec<DonutSlice>, center_text: String) -> Self {
        Self::with_config(DonutChartConfig::default(), slices, center_text)
    }

    pub fn with_config(config: DonutChartConfig, slices: Vec<DonutSlice>, center_text: String) -> Self {
        let segments = calculate_segments(&slices, config.padding_degrees.to_radians());
        Self {
            config,
            slices,
            segments,
            center_text,
        }
    }

    pub fn segments(&self) -> &[DonutSegment] {
        &self.segments
    }

    /// Render the donut into a square area of `height` points
    pub fn render(&self, ui: &mut egui::Ui, height: f32) {
        let size = egui::vec2(ui.available_width(), height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());

        if self.segments.is_empty() {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "No spending yet",
                egui::FontId::proportional(self.config.secondary_font_size),
                colors::TEXT_MUTED,
            );
            return;
        }

        // Shrink to fit narrow panels
        let outer = self.config.outer_radius.min(rect.width().min(rect.height()) / 2.0 - 4.0);
        let inner = self.config.inner_radius * (outer / self.config.outer_radius);
        let center = rect.center();

        let hovered = response
            .hover_pos()
            .and_then(|pos| segment_at(&self.segments, center, pos, inner, outer));

        for (i, segment) in self.segments.iter().enumerate() {
            let slice = &self.slices[segment.slice_index];
            if hovered == Some(i) {
                let lifted = point_on_circle(center, HOVER_OFFSET, segment.mid_angle());
                let color = lerp_color(slice.color, egui::Color32::WHITE, 0.2);
                self.draw_segment(ui.painter(), lifted, inner, outer, segment, color);
            } else {
                self.draw_segment(ui.painter(), center, inner, outer, segment, slice.color);
            }
        }

        self.render_center_text(ui.painter(), center);

        if let Some(i) = hovered {
            let slice = &self.slices[self.segments[i].slice_index];
            let label = slice.label.clone();
            let amount = format_plain_currency(slice.value);
            response.on_hover_ui_at_pointer(|ui| {
                ui.label(egui::RichText::new(label).strong());
                ui.label(format!("Amount: {}", amount));
            });
        }
    }

    /// Draw one segment as a polyline arc centred in the ring
    fn draw_segment(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        inner: f32,
        outer: f32,
        segment: &DonutSegment,
        color: egui::Color32,
    ) {
        let radius = (inner + outer) / 2.0;
        let thickness = outer - inner;

        // Roughly 3 pixels per step for a smooth curve
        let steps = ((segment.sweep() * radius / 3.0).ceil() as usize).clamp(2, 200);
        let step = segment.sweep() / steps as f32;

        let points: Vec<egui::Pos2> = (0..=steps)
            .map(|i| point_on_circle(center, radius, segment.start_angle + step * i as f32))
            .collect();

        painter.add(egui::Shape::line(points, egui::Stroke::new(thickness, color)));
    }

    fn render_center_text(&self, painter: &egui::Painter, center: egui::Pos2) {
        painter.text(
            center - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_CENTER,
            &self.center_text,
            egui::FontId::proportional(self.config.center_font_size),
            colors::TEXT_HEADING,
        );
        painter.text(
            center + egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            "Total",
            egui::FontId::proportional(self.config.secondary_font_size),
            colors::TEXT_MUTED,
        );
    }
}

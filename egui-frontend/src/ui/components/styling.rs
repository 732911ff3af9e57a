//! # Styling Module
//!
//! Styling functions for the financial dashboard.
//!
//! ## Key Functions:
//! - `setup_dashboard_style()` - Configure global egui styling
//! - `draw_gradient_background()` - Paint the soft vertical page gradient
//! - `card_frame()` - Frame used by every dashboard card
//! - `parse_hex_color()` - Turn `#rrggbb` display tokens into colors
//! - `lerp_color()` - Interpolate between two colors

use eframe::egui;
use egui::Color32;
use shared::DashboardError;

use crate::ui::components::theme::{colors, CURRENT_THEME};

pub const CARD_ROUNDING: f32 = 10.0;

/// Setup the light dashboard styling for the entire application
pub fn setup_dashboard_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        // Transparent panels so the gradient background shows through
        style.visuals.window_fill = Color32::TRANSPARENT;
        style.visuals.panel_fill = Color32::TRANSPARENT;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(32.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::new(12.0, egui::FontFamily::Proportional),
        );

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// Paint a vertical gradient from the theme's top color to its bottom color
pub fn draw_gradient_background(ui: &mut egui::Ui, rect: egui::Rect) {
    let top = CURRENT_THEME.layout.gradient_top;
    let bottom = CURRENT_THEME.layout.gradient_bottom;

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);

    ui.painter().add(egui::Shape::mesh(mesh));
}

/// White card with a light border and a soft drop shadow
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(CARD_ROUNDING))
        .inner_margin(egui::Margin::same(20.0))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 2.0),
            blur: 8.0,
            spread: 0.0,
            color: colors::CARD_SHADOW,
        })
}

/// Parse a `#rrggbb` (or `rrggbb`) color token
pub fn parse_hex_color(token: &str) -> Result<Color32, DashboardError> {
    let invalid = || DashboardError::InvalidColorToken(token.to_string());

    let hex = token.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Linear interpolation between two colors, `t` clamped to 0..=1
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

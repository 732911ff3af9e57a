//! # Theme Configuration
//!
//! Centralized color configuration for the financial dashboard.
//! All visual styling should use these constants to ensure consistency.
//!
//! ## Usage
//! ```rust
//! use crate::ui::components::theme::{colors, CURRENT_THEME};
//!
//! let treatment = CURRENT_THEME.alert_treatment(AlertKind::Warning);
//! let muted = colors::TEXT_MUTED;
//! ```

use eframe::egui::Color32;
use shared::AlertKind;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Brand colors used for headings, lines and bars
    pub brand: BrandColors,
    /// Severity colors for alerts and trend captions
    pub severity: SeverityColors,
    /// Background and layout colors
    pub layout: LayoutColors,
    /// Text and typography colors
    pub typography: TypographyColors,
    /// Chart-specific colors
    pub chart: ChartColors,
}

#[derive(Debug, Clone)]
pub struct BrandColors {
    pub primary: Color32,
    pub secondary: Color32,
}

/// Each severity has a strong color plus light fill/border tints for its container
#[derive(Debug, Clone)]
pub struct SeverityColors {
    pub warning: Color32,
    pub warning_fill: Color32,
    pub warning_border: Color32,
    pub success: Color32,
    pub success_fill: Color32,
    pub success_border: Color32,
    pub destructive: Color32,
    pub destructive_fill: Color32,
    pub destructive_border: Color32,
}

/// Layout and container colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    /// Gradient background colors
    pub gradient_top: Color32,
    pub gradient_bottom: Color32,
    /// Card and container colors
    pub card_background: Color32,
    pub card_shadow: Color32,
    pub card_border: Color32,
    /// Background of list rows inside cards
    pub muted_row: Color32,
    pub badge_background: Color32,
}

/// Text and typography colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    pub primary: Color32,
    pub muted: Color32,
    pub heading: Color32,
}

#[derive(Debug, Clone)]
pub struct ChartColors {
    /// Used for segments whose color token can't be parsed
    pub fallback_segment: Color32,
    /// Unfilled part of progress bars
    pub track: Color32,
}

/// Colors used to draw one alert row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTreatment {
    pub fill: Color32,
    pub border: Color32,
    pub icon: Color32,
}

/// Emphasis of a short caption under a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Neutral,
}

/// The current active theme - light theme with blue/violet accents
pub const CURRENT_THEME: Theme = Theme {
    brand: BrandColors {
        primary: Color32::from_rgb(37, 99, 235),
        secondary: Color32::from_rgb(124, 58, 237),
    },
    severity: SeverityColors {
        // Amber, with 10% / 20% tints over white
        warning: Color32::from_rgb(234, 179, 8),
        warning_fill: Color32::from_rgb(253, 247, 230),
        warning_border: Color32::from_rgb(251, 240, 206),
        // Green
        success: Color32::from_rgb(22, 163, 74),
        success_fill: Color32::from_rgb(232, 246, 237),
        success_border: Color32::from_rgb(208, 237, 219),
        // Red
        destructive: Color32::from_rgb(220, 38, 38),
        destructive_fill: Color32::from_rgb(252, 233, 233),
        destructive_border: Color32::from_rgb(248, 212, 212),
    },
    layout: LayoutColors {
        gradient_top: Color32::from_rgb(238, 242, 255),
        gradient_bottom: Color32::from_rgb(255, 255, 255),
        card_background: Color32::WHITE,
        card_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        card_border: Color32::from_rgb(226, 232, 240),
        muted_row: Color32::from_rgb(248, 250, 252),
        badge_background: Color32::from_rgb(241, 245, 249),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(15, 23, 42),
        muted: Color32::from_rgb(100, 116, 139),
        heading: Color32::from_rgb(30, 41, 59),
    },
    chart: ChartColors {
        fallback_segment: Color32::from_rgb(100, 116, 139),
        track: Color32::from_rgb(226, 232, 240),
    },
};

impl Theme {
    /// Colors for an alert row. Every kind has its own treatment.
    pub fn alert_treatment(&self, kind: AlertKind) -> AlertTreatment {
        let s = &self.severity;
        match kind {
            AlertKind::Warning => AlertTreatment {
                fill: s.warning_fill,
                border: s.warning_border,
                icon: s.warning,
            },
            AlertKind::Info => AlertTreatment {
                fill: s.success_fill,
                border: s.success_border,
                icon: s.success,
            },
            AlertKind::Danger => AlertTreatment {
                fill: s.destructive_fill,
                border: s.destructive_border,
                icon: s.destructive,
            },
        }
    }

    pub fn tone_color(&self, tone: Tone) -> Color32 {
        match tone {
            Tone::Positive => self.severity.success,
            Tone::Caution => self.severity.warning,
            Tone::Neutral => self.typography.muted,
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const PRIMARY: Color32 = CURRENT_THEME.brand.primary;
    pub const SECONDARY: Color32 = CURRENT_THEME.brand.secondary;

    // Typography colors
    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_MUTED: Color32 = CURRENT_THEME.typography.muted;
    pub const TEXT_HEADING: Color32 = CURRENT_THEME.typography.heading;

    // Layout colors
    pub const CARD_BACKGROUND: Color32 = CURRENT_THEME.layout.card_background;
    pub const CARD_BORDER: Color32 = CURRENT_THEME.layout.card_border;
    pub const CARD_SHADOW: Color32 = CURRENT_THEME.layout.card_shadow;
    pub const MUTED_ROW: Color32 = CURRENT_THEME.layout.muted_row;

    pub const SUCCESS: Color32 = CURRENT_THEME.severity.success;
    pub const WARNING: Color32 = CURRENT_THEME.severity.warning;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_alert_kind_has_distinct_treatment() {
        let warning = CURRENT_THEME.alert_treatment(AlertKind::Warning);
        let info = CURRENT_THEME.alert_treatment(AlertKind::Info);
        let danger = CURRENT_THEME.alert_treatment(AlertKind::Danger);

        assert_eq!(warning.icon, CURRENT_THEME.severity.warning);
        assert_eq!(info.icon, CURRENT_THEME.severity.success);
        assert_eq!(danger.icon, CURRENT_THEME.severity.destructive);

        assert_ne!(warning, info);
        assert_ne!(info, danger);
        assert_ne!(warning, danger);
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(CURRENT_THEME.tone_color(Tone::Positive), colors::SUCCESS);
        assert_eq!(CURRENT_THEME.tone_color(Tone::Caution), colors::WARNING);
        assert_eq!(CURRENT_THEME.tone_color(Tone::Neutral), colors::TEXT_MUTED);
    }
}

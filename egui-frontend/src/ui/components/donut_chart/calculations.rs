//! # Donut Chart Calculations
//!
//! Segment geometry and pointer hit-testing for the category donut.
//! Angles are in radians in screen space (y grows downward), so increasing
//! angles run clockwise. The first segment starts at 12 o'clock.

use eframe::egui;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Angle of 12 o'clock
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// One input value of the donut
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: f64,
    pub color: egui::Color32,
}

/// A laid-out segment of the donut
#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// Index of the slice this segment was built from
    pub slice_index: usize,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl DonutSegment {
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f32 {
        self.start_angle + self.sweep() / 2.0
    }

    fn contains_angle(&self, angle: f32) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Lay out slices around the circle, leaving `padding_angle` between segments.
///
/// Slices with a non-positive value get no segment. If the padding would eat the
/// whole circle it is dropped.
pub fn calculate_segments(slices: &[DonutSlice], padding_angle: f32) -> Vec<DonutSegment> {
    let visible: Vec<(usize, f64)> = slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.value > 0.0 && slice.value.is_finite())
        .map(|(index, slice)| (index, slice.value))
        .collect();

    let total: f64 = visible.iter().map(|(_, value)| value).sum();
    if visible.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut padding = if visible.len() > 1 { padding_angle.max(0.0) } else { 0.0 };
    let mut available = TAU - padding * visible.len() as f32;
    if available <= 0.0 {
        padding = 0.0;
        available = TAU;
    }

    let mut start = START_ANGLE;
    visible
        .into_iter()
        .map(|(slice_index, value)| {
            let sweep = available * (value / total) as f32;
            let segment = DonutSegment {
                slice_index,
                start_angle: start,
                end_angle: start + sweep,
            };
            start += sweep + padding;
            segment
        })
        .collect()
}

/// Find the segment under `pointer`, if it lies inside the ring
pub fn segment_at(
    segments: &[DonutSegment],
    center: egui::Pos2,
    pointer: egui::Pos2,
    inner_radius: f32,
    outer_radius: f32,
) -> Option<usize> {
    let offset = pointer - center;
    let distance = offset.length();
    if distance < inner_radius || distance > outer_radius {
        return None;
    }

    let angle = normalize_angle(offset.y.atan2(offset.x));
    segments.iter().position(|segment| segment.contains_angle(angle))
}

/// Map any angle into `[START_ANGLE, START_ANGLE + TAU)`
fn normalize_angle(angle: f32) -> f32 {
    (angle - START_ANGLE).rem_euclid(TAU) + START_ANGLE
}

/// Point on a circle of `radius` around `center` at `angle`
pub fn point_on_circle(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    egui::pos2(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(values: &[f64]) -> Vec<DonutSlice> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| DonutSlice {
                label: format!("Slice {}", i),
                value: *value,
                color: egui::Color32::GRAY,
            })
            .collect()
    }

    #[test]
    fn test_sweeps_are_proportional_without_padding() {
        let segments =
            calculate_segments(&slices(&[1200.0, 800.0, 600.0, 500.0, 400.0, 300.0, 200.0]), 0.0);

        assert_eq!(segments.len(), 7);
        assert!((segments[0].sweep() - TAU * 0.3).abs() < 1e-4);
        assert!((segments[6].sweep() - TAU * 0.05).abs() < 1e-4);
        assert!((segments[0].start_angle - START_ANGLE).abs() < 1e-6);

        let total: f32 = segments.iter().map(|s| s.sweep()).sum();
        assert!((total - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_padding_leaves_gaps() {
        let padding = 2f32.to_radians();
        let segments = calculate_segments(&slices(&[1.0, 1.0, 2.0]), padding);

        let total_sweep: f32 = segments.iter().map(|s| s.sweep()).sum();
        assert!((total_sweep + padding * 3.0 - TAU).abs() < 1e-4);
        assert!((segments[1].start_angle - segments[0].end_angle - padding).abs() < 1e-5);
        assert!((segments[2].sweep() - 2.0 * segments[0].sweep()).abs() < 1e-4);
    }

    #[test]
    fn test_single_slice_has_no_padding() {
        let segments = calculate_segments(&slices(&[42.0]), 0.5);
        assert_eq!(segments.len(), 1);
        assert!((segments[0].sweep() - TAU).abs() < 1e-5);
    }

    #[test]
    fn test_empty_and_zero_values() {
        assert!(calculate_segments(&[], 0.1).is_empty());
        assert!(calculate_segments(&slices(&[0.0, 0.0]), 0.1).is_empty());

        let segments = calculate_segments(&slices(&[0.0, 5.0, -3.0, 5.0]), 0.0);
        let indices: Vec<usize> = segments.iter().map(|s| s.slice_index).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_hit_testing() {
        let center = egui::pos2(200.0, 200.0);
        let segments = calculate_segments(&slices(&[3.0, 1.0]), 0.0);

        // Just clockwise of 12 o'clock, inside the ring
        let top_right = center + egui::vec2(10.0, -90.0);
        assert_eq!(segment_at(&segments, center, top_right, 60.0, 120.0), Some(0));

        // Just counter-clockwise of 12 o'clock belongs to the last segment
        let top_left = center + egui::vec2(-10.0, -90.0);
        assert_eq!(segment_at(&segments, center, top_left, 60.0, 120.0), Some(1));

        // Hole and outside
        assert_eq!(segment_at(&segments, center, center, 60.0, 120.0), None);
        let far = center + egui::vec2(0.0, 200.0);
        assert_eq!(segment_at(&segments, center, far, 60.0, 120.0), None);
    }

    #[test]
    fn test_hit_testing_in_padding_gap() {
        let center = egui::pos2(0.0, 0.0);
        let segments = calculate_segments(&slices(&[1.0, 1.0]), 0.2);

        let in_gap = point_on_circle(center, 90.0, segments[0].end_angle + 0.1);
        assert_eq!(segment_at(&segments, center, in_gap, 60.0, 120.0), None);

        let in_second = point_on_circle(center, 90.0, segments[1].mid_angle());
        assert_eq!(segment_at(&segments, center, in_second, 60.0, 120.0), Some(1));
    }
}

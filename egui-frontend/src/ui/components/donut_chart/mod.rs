//! # Donut Chart Module
//!
//! Donut chart of spending per expense category, one colored segment per
//! category with small gaps between them.
//!
//! ## Key Components:
//! - `calculations.rs` - Segment angles and pointer hit-testing
//! - `renderer.rs` - Painting the ring, center total and hover tooltip

pub mod calculations;
pub mod renderer;

pub use calculations::DonutSlice;
pub use renderer::DonutChart;

//! Goal Progress Bar Module
//!
//! Progress bar shared by the budget card and the savings goals list.

pub mod progress_bar;

pub use progress_bar::*;

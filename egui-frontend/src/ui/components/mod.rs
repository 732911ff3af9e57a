//! # UI Components Module
//!
//! All UI components of the financial dashboard. Each submodule handles one
//! part of the screen.
//!
//! ## Module Organization:
//! - `alert_list` - Budget alerts card
//! - `metric_cards` - Key figure cards (spent, budget used, savings goal)
//! - `chart_renderer` - Spending trend line chart and weekly bar chart
//! - `donut_chart` - Expense category donut
//! - `category_breakdown` - Category donut card and detailed category list
//! - `goal_renderer` - Savings goals card
//! - `goal_progress_bar` - Progress bar shared by budget and goals
//! - `styling` - Global style, backgrounds, card frame, color helpers
//! - `theme` - Color palette and alert treatments
//! - `ui_components` - Reusable card, badge and grid helpers

pub mod alert_list;
pub mod category_breakdown;
pub mod chart_renderer;
pub mod donut_chart;
pub mod goal_progress_bar;
pub mod goal_renderer;
pub mod metric_cards;
pub mod styling;
pub mod theme;
pub mod ui_components;

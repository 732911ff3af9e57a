pub mod app_coordinator;
pub mod app_state;
pub mod components;
pub mod formatting;
pub mod mappers;

pub use app_state::FinancialDashboardApp;

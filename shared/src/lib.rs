use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod fixtures;
pub mod metrics;
pub mod source;

pub use metrics::{DashboardMetrics, MonthlyBudget};
pub use source::{DashboardDataSource, FixtureDataSource};

/// One month of actual vs. predicted spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpendingPoint {
    /// Short month label, e.g. "Jan"
    pub month: String,
    /// Amount actually spent in the month
    pub amount: f64,
    /// Forecast amount for the month
    pub predicted: f64,
}

/// A named bucket of spending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub name: String,
    pub amount: f64,
    /// Display colour token in `#rrggbb` form
    pub color: String,
    /// Stored share of total spending (0-100)
    pub percentage: f64,
}

/// A savings target with current progress and a deadline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    /// Target amount (expected to be positive)
    pub target: f64,
    /// Amount saved so far
    pub current: f64,
    pub deadline: NaiveDate,
}

impl SavingsGoal {
    /// Percent of the target reached so far.
    ///
    /// The value is not clamped: an over-funded goal reports more than 100.
    /// A non-positive target yields 0.
    pub fn progress(&self) -> f64 {
        if self.target > 0.0 {
            (self.current / self.target) * 100.0
        } else {
            0.0
        }
    }

    /// Amount still missing to reach the target, never negative
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    pub fn is_complete(&self) -> bool {
        self.target > 0.0 && self.current >= self.target
    }
}

/// Severity of a budget alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
            AlertKind::Danger => "danger",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" => Ok(AlertKind::Warning),
            "info" => Ok(AlertKind::Info),
            "danger" => Ok(AlertKind::Danger),
            _ => Err(DashboardError::UnknownAlertKind(s.to_string())),
        }
    }
}

/// A budget alert shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
    /// Category label. Matches an `ExpenseCategory::name` by value only.
    pub category: String,
}

/// Spending for one week of the active month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySpendingPoint {
    /// Week label, e.g. "Week 1"
    pub week: String,
    pub amount: f64,
}

/// Spending compared with the previous month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingComparison {
    /// Percent change vs. last month (negative = spent less)
    pub change_percent: f64,
}

/// Everything the dashboard renders, loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub monthly_spending: Vec<MonthlySpendingPoint>,
    pub expense_categories: Vec<ExpenseCategory>,
    pub savings_goals: Vec<SavingsGoal>,
    pub alerts: Vec<Alert>,
    pub weekly_spending: Vec<WeeklySpendingPoint>,
    pub spending_comparison: SpendingComparison,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error("Monthly budget must be a positive, finite amount (got {0})")]
    InvalidBudget(f64),
    #[error("Unknown alert type: {0:?}")]
    UnknownAlertKind(String),
    #[error("Invalid colour token: {0:?}")]
    InvalidColorToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(target: f64, current: f64) -> SavingsGoal {
        SavingsGoal {
            name: "Test".to_string(),
            target,
            current,
            deadline: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(goal(10000.0, 7500.0).progress(), 75.0);
        assert_eq!(goal(3000.0, 1800.0).progress(), 60.0);
        assert_eq!(goal(25000.0, 12000.0).progress(), 48.0);
    }

    #[test]
    fn test_goal_progress_is_not_clamped() {
        let over = goal(1000.0, 1500.0);
        assert_eq!(over.progress(), 150.0);
        assert!(over.is_complete());
        assert_eq!(over.remaining(), 0.0);
    }

    #[test]
    fn test_goal_progress_with_zero_target() {
        let broken = goal(0.0, 50.0);
        assert_eq!(broken.progress(), 0.0);
        assert!(!broken.is_complete());
    }

    #[test]
    fn test_alert_kind_parse() {
        assert_eq!("warning".parse::<AlertKind>().unwrap(), AlertKind::Warning);
        assert_eq!("Info".parse::<AlertKind>().unwrap(), AlertKind::Info);
        assert_eq!(" danger ".parse::<AlertKind>().unwrap(), AlertKind::Danger);

        assert_eq!(
            "critical".parse::<AlertKind>(),
            Err(DashboardError::UnknownAlertKind("critical".to_string()))
        );
        assert!("".parse::<AlertKind>().is_err());
    }

    #[test]
    fn test_alert_serde_uses_type_field() {
        let json = r#"{"type":"warning","message":"Over budget","category":"Food & Dining"}"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.category, "Food & Dining");

        let unknown = r#"{"type":"critical","message":"?","category":"Shopping"}"#;
        assert!(serde_json::from_str::<Alert>(unknown).is_err());
    }

    #[test]
    fn test_goal_deadline_serializes_as_date() {
        let json = serde_json::to_string(&goal(100.0, 10.0)).unwrap();
        assert!(json.contains("\"deadline\":\"2024-12-31\""));
    }
}

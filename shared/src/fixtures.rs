//! Sample dataset shown by the dashboard.
//!
//! These tables stand in for a real data source and are served through
//! [`FixtureDataSource`](crate::source::FixtureDataSource).

use chrono::NaiveDate;

use crate::{
    Alert, AlertKind, DashboardData, ExpenseCategory, MonthlySpendingPoint, SavingsGoal,
    SpendingComparison, WeeklySpendingPoint,
};

pub fn monthly_spending() -> Vec<MonthlySpendingPoint> {
    [
        ("Jan", 4200.0, 4100.0),
        ("Feb", 3800.0, 3900.0),
        ("Mar", 4500.0, 4300.0),
        ("Apr", 3900.0, 4000.0),
        ("May", 4100.0, 4200.0),
        ("Jun", 4800.0, 4500.0),
    ]
    .into_iter()
    .map(|(month, amount, predicted)| MonthlySpendingPoint {
        month: month.to_string(),
        amount,
        predicted,
    })
    .collect()
}

pub fn expense_categories() -> Vec<ExpenseCategory> {
    [
        ("Food & Dining", 1200.0, "#2563eb", 30.0),
        ("Transportation", 800.0, "#16a34a", 20.0),
        ("Shopping", 600.0, "#eab308", 15.0),
        ("Utilities", 500.0, "#dc2626", 12.5),
        ("Entertainment", 400.0, "#9333ea", 10.0),
        ("Healthcare", 300.0, "#ea580c", 7.5),
        ("Others", 200.0, "#64748b", 5.0),
    ]
    .into_iter()
    .map(|(name, amount, color, percentage)| ExpenseCategory {
        name: name.to_string(),
        amount,
        color: color.to_string(),
        percentage,
    })
    .collect()
}

pub fn savings_goals() -> Vec<SavingsGoal> {
    [
        ("Emergency Fund", 10000.0, 7500.0, (2024, 12, 31)),
        ("Vacation", 3000.0, 1800.0, (2024, 8, 15)),
        ("New Car", 25000.0, 12000.0, (2025, 6, 1)),
    ]
    .into_iter()
    .filter_map(|(name, target, current, (y, m, d))| {
        let deadline = NaiveDate::from_ymd_opt(y, m, d)?;
        Some(SavingsGoal {
            name: name.to_string(),
            target,
            current,
            deadline,
        })
    })
    .collect()
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            kind: AlertKind::Warning,
            message: "You've exceeded your dining budget by 15% this month".to_string(),
            category: "Food & Dining".to_string(),
        },
        Alert {
            kind: AlertKind::Info,
            message: "Great job! You're 20% under budget for transportation".to_string(),
            category: "Transportation".to_string(),
        },
        Alert {
            kind: AlertKind::Danger,
            message: "Unusual spending pattern detected in shopping category".to_string(),
            category: "Shopping".to_string(),
        },
    ]
}

pub fn weekly_spending() -> Vec<WeeklySpendingPoint> {
    [("Week 1", 950.0), ("Week 2", 1200.0), ("Week 3", 800.0), ("Week 4", 1100.0)]
        .into_iter()
        .map(|(week, amount)| WeeklySpendingPoint {
            week: week.to_string(),
            amount,
        })
        .collect()
}

pub fn spending_comparison() -> SpendingComparison {
    SpendingComparison { change_percent: -12.0 }
}

/// The whole sample dataset in one value
pub fn dashboard_data() -> DashboardData {
    DashboardData {
        monthly_spending: monthly_spending(),
        expense_categories: expense_categories(),
        savings_goals: savings_goals(),
        alerts: alerts(),
        weekly_spending: weekly_spending(),
        spending_comparison: spending_comparison(),
    }
}

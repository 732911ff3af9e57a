//! Derived metrics computed from the dashboard data.
//!
//! Everything here is a pure function of its inputs.

use serde::{Deserialize, Serialize};

use crate::{DashboardData, DashboardError, ExpenseCategory, SavingsGoal};

/// Monthly budget used for the "Budget Used" figure
pub const DEFAULT_MONTHLY_BUDGET: f64 = 4500.0;

/// A validated monthly budget. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MonthlyBudget(f64);

impl MonthlyBudget {
    pub fn new(amount: f64) -> Result<Self, DashboardError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(DashboardError::InvalidBudget(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl Default for MonthlyBudget {
    fn default() -> Self {
        Self(DEFAULT_MONTHLY_BUDGET)
    }
}

impl TryFrom<f64> for MonthlyBudget {
    type Error = DashboardError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<MonthlyBudget> for f64 {
    fn from(budget: MonthlyBudget) -> f64 {
        budget.0
    }
}

/// Sum of all category amounts. Empty input yields 0.
pub fn total_spent(categories: &[ExpenseCategory]) -> f64 {
    categories.iter().map(|category| category.amount).sum()
}

/// Percent of the monthly budget already spent
pub fn budget_used(total_spent: f64, budget: MonthlyBudget) -> f64 {
    (total_spent / budget.amount()) * 100.0
}

/// Computed share of total spending for one category, `None` when nothing was spent
pub fn category_share(category: &ExpenseCategory, total_spent: f64) -> Option<f64> {
    if total_spent == 0.0 {
        return None;
    }
    Some((category.amount / total_spent) * 100.0)
}

/// Check that every stored percentage matches the computed share within `tolerance`
pub fn percentages_consistent(categories: &[ExpenseCategory], tolerance: f64) -> bool {
    let total = total_spent(categories);
    categories.iter().all(|category| match category_share(category, total) {
        Some(share) => (share - category.percentage).abs() <= tolerance,
        None => category.percentage.abs() <= tolerance,
    })
}

/// Scalar figures shown in the metric cards
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardMetrics {
    pub total_spent: f64,
    pub budget_used: f64,
    pub monthly_budget: MonthlyBudget,
    /// Goal featured in the "Savings Goal" card (the first one)
    pub headline_goal: Option<SavingsGoal>,
}

impl DashboardMetrics {
    pub fn compute(data: &DashboardData, monthly_budget: MonthlyBudget) -> Self {
        let total_spent = total_spent(&data.expense_categories);
        Self {
            total_spent,
            budget_used: budget_used(total_spent, monthly_budget),
            monthly_budget,
            headline_goal: data.savings_goals.first().cloned(),
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget_used > 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_total_spent_for_fixtures() {
        let categories = fixtures::expense_categories();
        assert_eq!(total_spent(&categories), 4000.0);
    }

    #[test]
    fn test_total_spent_empty_is_zero() {
        assert_eq!(total_spent(&[]), 0.0);
    }

    #[test]
    fn test_budget_used_for_fixtures() {
        let used = budget_used(4000.0, MonthlyBudget::default());
        assert!((used - 88.888_888).abs() < 1e-3);
        assert_eq!(format!("{:.1}", used), "88.9");
    }

    #[test]
    fn test_budget_rejects_invalid_amounts() {
        assert_eq!(MonthlyBudget::new(0.0), Err(DashboardError::InvalidBudget(0.0)));
        assert!(MonthlyBudget::new(-10.0).is_err());
        assert!(MonthlyBudget::new(f64::NAN).is_err());
        assert!(MonthlyBudget::new(f64::INFINITY).is_err());
        assert_eq!(MonthlyBudget::new(3000.0).unwrap().amount(), 3000.0);
    }

    #[test]
    fn test_budget_deserialization_is_validated() {
        let budget: MonthlyBudget = serde_json::from_str("5200").unwrap();
        assert_eq!(budget.amount(), 5200.0);
        assert!(serde_json::from_str::<MonthlyBudget>("0").is_err());
    }

    #[test]
    fn test_category_shares_match_stored_percentages() {
        let categories = fixtures::expense_categories();
        let total = total_spent(&categories);

        let food = &categories[0];
        assert_eq!(food.name, "Food & Dining");
        assert_eq!(category_share(food, total), Some(30.0));

        for category in &categories {
            let share = category_share(category, total).unwrap();
            assert!((share - category.percentage).abs() < 0.05, "{}", category.name);
        }
        assert!(percentages_consistent(&categories, 0.05));
    }

    #[test]
    fn test_inconsistent_percentages_are_detected() {
        let mut categories = fixtures::expense_categories();
        categories[0].percentage = 45.0;
        assert!(!percentages_consistent(&categories, 0.05));
    }

    #[test]
    fn test_category_share_without_spending() {
        let category = ExpenseCategory {
            name: "Empty".to_string(),
            amount: 0.0,
            color: "#000000".to_string(),
            percentage: 0.0,
        };
        assert_eq!(category_share(&category, 0.0), None);
        assert!(percentages_consistent(&[category], 0.05));
    }

    #[test]
    fn test_dashboard_metrics_compute() {
        let data = fixtures::dashboard_data();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::default());

        assert_eq!(metrics.total_spent, 4000.0);
        assert!(!metrics.is_over_budget());
        let goal = metrics.headline_goal.unwrap();
        assert_eq!(goal.name, "Emergency Fund");
        assert_eq!(goal.progress(), 75.0);
    }

    #[test]
    fn test_small_budget_goes_over() {
        let data = fixtures::dashboard_data();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::new(3200.0).unwrap());
        assert_eq!(metrics.budget_used, 125.0);
        assert!(metrics.is_over_budget());
    }
}

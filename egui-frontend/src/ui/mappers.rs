//! # View Model Mappers
//!
//! Converts dashboard data and derived metrics into plain display rows.
//! Rendering code only reads these rows, so everything the screen shows can be
//! checked without a window.

use eframe::egui::Color32;
use log::warn;
use shared::{AlertKind, DashboardData, DashboardMetrics, SavingsGoal, SpendingComparison};

use crate::ui::components::donut_chart::DonutSlice;
use crate::ui::components::goal_progress_bar::fill_fraction;
use crate::ui::components::styling::parse_hex_color;
use crate::ui::components::theme::{AlertTreatment, Tone, CURRENT_THEME};
use crate::ui::formatting::{format_currency, format_percentage, format_plain_currency};

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub kind: AlertKind,
    pub message: String,
    pub category: String,
    pub treatment: AlertTreatment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub tone: Tone,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Set when the value needs attention, e.g. spending above budget
    pub value_color: Option<Color32>,
    pub icon: &'static str,
    pub icon_color: Color32,
    pub caption: Option<Caption>,
    /// Raw percentage for cards that show a progress bar
    pub progress: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub amount: f64,
    pub color: Color32,
    pub share_label: String,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub name: String,
    pub due_label: String,
    pub current_label: String,
    pub target_label: String,
    /// Unclamped percentage, e.g. "125.0% complete"
    pub progress_label: String,
    /// "$2,500 to go", or "Goal reached" once complete
    pub status_label: String,
    pub complete: bool,
    /// Bar fill, clamped to 0..=1
    pub fill: f32,
}

/// Labelled series for the line and bar charts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub subtitle: String,
    pub alerts: Vec<AlertRow>,
    pub metric_cards: Vec<MetricCard>,
    pub actual_spending: ChartSeries,
    pub predicted_spending: ChartSeries,
    pub categories: Vec<CategoryRow>,
    pub total_spent_label: String,
    pub goals: Vec<GoalRow>,
    pub weekly_spending: ChartSeries,
}

impl DashboardView {
    pub fn build(title: &str, data: &DashboardData, metrics: &DashboardMetrics) -> Self {
        Self {
            title: title.to_string(),
            subtitle: "Smart expense tracking with predictive analytics".to_string(),
            alerts: data.alerts.iter().map(|alert| AlertRow {
                kind: alert.kind,
                message: alert.message.clone(),
                category: alert.category.clone(),
                treatment: CURRENT_THEME.alert_treatment(alert.kind),
            }).collect(),
            metric_cards: metric_cards(metrics, &data.spending_comparison),
            actual_spending: ChartSeries {
                labels: data.monthly_spending.iter().map(|p| p.month.clone()).collect(),
                values: data.monthly_spending.iter().map(|p| p.amount).collect(),
            },
            predicted_spending: ChartSeries {
                labels: data.monthly_spending.iter().map(|p| p.month.clone()).collect(),
                values: data.monthly_spending.iter().map(|p| p.predicted).collect(),
            },
            categories: data.expense_categories.iter().map(|category| CategoryRow {
                name: category.name.clone(),
                amount: category.amount,
                color: category_color(&category.color),
                share_label: format!("{} of total", format_percentage(category.percentage)),
                amount_label: format_plain_currency(category.amount),
            }).collect(),
            total_spent_label: format_currency(metrics.total_spent),
            goals: data.savings_goals.iter().map(goal_row).collect(),
            weekly_spending: ChartSeries {
                labels: data.weekly_spending.iter().map(|p| p.week.clone()).collect(),
                values: data.weekly_spending.iter().map(|p| p.amount).collect(),
            },
        }
    }

    /// Slices for the category donut
    pub fn donut_slices(&self) -> Vec<DonutSlice> {
        self.categories
            .iter()
            .map(|row| DonutSlice {
                label: row.name.clone(),
                value: row.amount,
                color: row.color,
            })
            .collect()
    }
}

fn metric_cards(metrics: &DashboardMetrics, comparison: &SpendingComparison) -> Vec<MetricCard> {
    let mut cards = vec![
        MetricCard {
            title: "Monthly Spent".to_string(),
            value: format_currency(metrics.total_spent),
            value_color: None,
            icon: "💵",
            icon_color: CURRENT_THEME.brand.primary,
            caption: Some(comparison_caption(comparison)),
            progress: None,
        },
        MetricCard {
            title: "Budget Used".to_string(),
            value: format!("{:.1}%", metrics.budget_used),
            value_color: metrics
                .is_over_budget()
                .then_some(CURRENT_THEME.severity.destructive),
            icon: "💳",
            icon_color: CURRENT_THEME.brand.secondary,
            caption: None,
            progress: Some(metrics.budget_used),
        },
    ];

    if let Some(goal) = &metrics.headline_goal {
        cards.push(MetricCard {
            title: "Savings Goal".to_string(),
            value: format_currency(goal.current),
            value_color: None,
            icon: "🐷",
            icon_color: CURRENT_THEME.severity.success,
            caption: Some(Caption {
                text: format!("{:.0}% of target", goal.progress()),
                tone: Tone::Positive,
                icon: "📈",
            }),
            progress: None,
        });
    }

    cards
}

/// Caption under "Monthly Spent" describing the change vs. last month
pub fn comparison_caption(comparison: &SpendingComparison) -> Caption {
    let change = comparison.change_percent;
    if change < 0.0 {
        Caption {
            text: format!("{:.0}% less than last month", change.abs()),
            tone: Tone::Positive,
            icon: "📉",
        }
    } else if change > 0.0 {
        Caption {
            text: format!("{:.0}% more than last month", change),
            tone: Tone::Caution,
            icon: "📈",
        }
    } else {
        Caption {
            text: "Same as last month".to_string(),
            tone: Tone::Neutral,
            icon: "➖",
        }
    }
}

pub fn goal_row(goal: &SavingsGoal) -> GoalRow {
    let progress = goal.progress();
    GoalRow {
        name: goal.name.clone(),
        due_label: format!("Due: {}", goal.deadline.format("%Y-%m-%d")),
        current_label: format_currency(goal.current),
        target_label: format!("of {}", format_currency(goal.target)),
        progress_label: format!("{:.1}% complete", progress),
        status_label: if goal.is_complete() {
            "Goal reached".to_string()
        } else {
            format!("{} to go", format_currency(goal.remaining()))
        },
        complete: goal.is_complete(),
        fill: fill_fraction(progress),
    }
}

fn category_color(token: &str) -> Color32 {
    parse_hex_color(token).unwrap_or_else(|e| {
        warn!("{}, using fallback color", e);
        CURRENT_THEME.chart.fallback_segment
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{fixtures, MonthlyBudget};

    fn fixture_view() -> DashboardView {
        let data = fixtures::dashboard_data();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::default());
        DashboardView::build("AI Financial Dashboard", &data, &metrics)
    }

    #[test]
    fn test_building_twice_gives_identical_view() {
        assert_eq!(fixture_view(), fixture_view());
    }

    #[test]
    fn test_metric_cards() {
        let view = fixture_view();
        assert_eq!(view.metric_cards.len(), 3);

        let spent = &view.metric_cards[0];
        assert_eq!(spent.title, "Monthly Spent");
        assert_eq!(spent.value, "$4,000");
        let caption = spent.caption.as_ref().unwrap();
        assert_eq!(caption.text, "12% less than last month");
        assert_eq!(caption.tone, Tone::Positive);

        let budget = &view.metric_cards[1];
        assert_eq!(budget.value, "88.9%");
        assert_eq!(budget.value_color, None);
        assert!((budget.progress.unwrap() - 88.888_9).abs() < 1e-3);

        let savings = &view.metric_cards[2];
        assert_eq!(savings.value, "$7,500");
        assert_eq!(savings.caption.as_ref().unwrap().text, "75% of target");
    }

    #[test]
    fn test_no_savings_card_without_goals() {
        let mut data = fixtures::dashboard_data();
        data.savings_goals.clear();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::default());
        let view = DashboardView::build("Dashboard", &data, &metrics);

        assert_eq!(view.metric_cards.len(), 2);
        assert!(view.goals.is_empty());
    }

    #[test]
    fn test_budget_card_turns_red_when_over_budget() {
        let data = fixtures::dashboard_data();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::new(3000.0).unwrap());
        let view = DashboardView::build("Dashboard", &data, &metrics);

        let budget = &view.metric_cards[1];
        assert_eq!(budget.value, "133.3%");
        assert_eq!(budget.value_color, Some(CURRENT_THEME.severity.destructive));
    }

    #[test]
    fn test_alert_rows_use_kind_treatment() {
        let view = fixture_view();
        let theme = &CURRENT_THEME.severity;

        assert_eq!(view.alerts[0].kind, AlertKind::Warning);
        assert_eq!(view.alerts[0].treatment.icon, theme.warning);
        assert_eq!(view.alerts[0].treatment.fill, theme.warning_fill);

        assert_eq!(view.alerts[1].kind, AlertKind::Info);
        assert_eq!(view.alerts[1].treatment.icon, theme.success);

        assert_eq!(view.alerts[2].kind, AlertKind::Danger);
        assert_eq!(view.alerts[2].treatment.icon, theme.destructive);
        assert_eq!(view.alerts[2].category, "Shopping");
    }

    #[test]
    fn test_comparison_captions() {
        let more = comparison_caption(&SpendingComparison { change_percent: 8.0 });
        assert_eq!(more.text, "8% more than last month");
        assert_eq!(more.tone, Tone::Caution);

        let same = comparison_caption(&SpendingComparison { change_percent: 0.0 });
        assert_eq!(same.tone, Tone::Neutral);
    }

    #[test]
    fn test_goal_rows() {
        let view = fixture_view();
        let emergency = &view.goals[0];

        assert_eq!(emergency.name, "Emergency Fund");
        assert_eq!(emergency.due_label, "Due: 2024-12-31");
        assert_eq!(emergency.current_label, "$7,500");
        assert_eq!(emergency.target_label, "of $10,000");
        assert_eq!(emergency.progress_label, "75.0% complete");
        assert_eq!(emergency.fill, 0.75);
        assert_eq!(emergency.status_label, "$2,500 to go");
        assert!(!emergency.complete);

        assert_eq!(view.goals[1].progress_label, "60.0% complete");
        assert_eq!(view.goals[2].progress_label, "48.0% complete");
    }

    #[test]
    fn test_overfunded_goal_label_overflows_but_fill_is_clamped() {
        let goal = SavingsGoal {
            name: "Laptop".to_string(),
            target: 2000.0,
            current: 2500.0,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        let row = goal_row(&goal);
        assert_eq!(row.progress_label, "125.0% complete");
        assert_eq!(row.fill, 1.0);
        assert_eq!(row.status_label, "Goal reached");
        assert!(row.complete);
    }

    #[test]
    fn test_category_rows() {
        let view = fixture_view();
        let food = &view.categories[0];
        assert_eq!(food.share_label, "30% of total");
        assert_eq!(food.amount_label, "$1200");
        assert_eq!(food.color, Color32::from_rgb(37, 99, 235));

        assert_eq!(view.categories[3].share_label, "12.5% of total");
        assert_eq!(view.total_spent_label, "$4,000");
    }

    #[test]
    fn test_bad_category_color_falls_back() {
        let mut data = fixtures::dashboard_data();
        data.expense_categories[0].color = "not-a-color".to_string();
        let metrics = DashboardMetrics::compute(&data, MonthlyBudget::default());
        let view = DashboardView::build("Dashboard", &data, &metrics);

        assert_eq!(view.categories[0].color, CURRENT_THEME.chart.fallback_segment);
    }

    #[test]
    fn test_chart_series() {
        let view = fixture_view();
        assert_eq!(view.actual_spending.labels[5], "Jun");
        assert_eq!(view.actual_spending.values[5], 4800.0);
        assert_eq!(view.predicted_spending.values[5], 4500.0);
        assert_eq!(view.weekly_spending.labels, ["Week 1", "Week 2", "Week 3", "Week 4"]);
        assert_eq!(view.weekly_spending.values, [950.0, 1200.0, 800.0, 1100.0]);

        let slices = view.donut_slices();
        assert_eq!(slices.len(), 7);
        assert_eq!(slices[0].value, 1200.0);
    }
}

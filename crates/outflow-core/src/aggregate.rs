//! Per-category recurring/variable split and forecasts
//!
//! Merges actual month spend with the monthly equivalents of active recurring
//! rules, then projects every category against its goal.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::forecast::{forecast, round_cents};
use crate::frequency::monthly_equivalent;
use crate::models::{Category, CategoryForecastResult, ExpenseRecord, GoalSet, RecurringRule};

/// Sum expense amounts grouped by category
pub fn spend_by_category(expenses: &[ExpenseRecord]) -> HashMap<Category, f64> {
    let mut totals: HashMap<Category, f64> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.amount;
    }
    totals
}

/// Total expense amount across all categories
pub fn total_spend(expenses: &[ExpenseRecord]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Monthly-equivalent recurring spend grouped by category. Inactive rules
/// contribute nothing.
pub fn recurring_by_category(rules: &[RecurringRule]) -> HashMap<Category, f64> {
    let mut totals: HashMap<Category, f64> = HashMap::new();
    for rule in rules.iter().filter(|rule| rule.is_active) {
        *totals.entry(rule.category).or_insert(0.0) +=
            monthly_equivalent(rule.amount, rule.frequency);
    }
    totals
}

/// Total monthly-equivalent cost of all active recurring rules
pub fn monthly_impact(rules: &[RecurringRule]) -> f64 {
    rules
        .iter()
        .filter(|rule| rule.is_active)
        .map(|rule| monthly_equivalent(rule.amount, rule.frequency))
        .sum()
}

/// Forecast every category appearing in either the actual spend or the
/// recurring rules.
///
/// Variable spend is actual minus the recurring estimate, floored at zero:
/// recurring spend is assumed to be a subset of actual spend, and a bill that
/// has not been charged yet this month must not drive variable negative.
pub fn aggregate_by_category(
    actual_by_category: &HashMap<Category, f64>,
    rules: &[RecurringRule],
    goals: &GoalSet,
    days_elapsed: u32,
) -> HashMap<Category, CategoryForecastResult> {
    let recurring_totals = recurring_by_category(rules);

    let categories: HashSet<Category> = actual_by_category
        .keys()
        .chain(recurring_totals.keys())
        .copied()
        .collect();

    let mut results = HashMap::with_capacity(categories.len());
    for category in categories {
        let recurring = recurring_totals.get(&category).copied().unwrap_or(0.0);
        let spent = actual_by_category.get(&category).copied().unwrap_or(0.0);
        let variable = (spent - recurring).max(0.0);

        let goal = goals.goal_for(category);
        let projected_total = variable + recurring;
        let projection = forecast(projected_total, goal, days_elapsed);

        results.insert(
            category,
            CategoryForecastResult {
                recurring: round_cents(recurring),
                variable: round_cents(variable),
                projected_spend: round_cents(projected_total),
                budget: goal,
                will_overspend: projection.will_overspend,
                overspend_amount: projection.overspend_amount,
            },
        );
    }

    debug!(
        categories = results.len(),
        days_elapsed, "Aggregated category forecasts"
    );

    results
}

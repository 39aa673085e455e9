//! Whole-budget forecast and budget snapshot recompute

use serde::{Deserialize, Serialize};

use crate::aggregate::monthly_impact;
use crate::forecast::{forecast, round_cents};
use crate::models::{ForecastResult, RecurringRule};

/// Month forecast for the whole budget, with the recurring share broken out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthForecast {
    #[serde(flatten)]
    pub forecast: ForecastResult,
    /// Monthly-equivalent total of the active recurring rules
    pub total_recurring: f64,
}

/// Forecast total monthly spend: actual month spend plus the monthly
/// equivalents of all active recurring rules, projected against the total
/// budget.
pub fn forecast_month(
    month_spend: f64,
    rules: &[RecurringRule],
    total_budget: f64,
    days_elapsed: u32,
) -> MonthForecast {
    let total_recurring = monthly_impact(rules);
    let combined_spend = month_spend + total_recurring;

    MonthForecast {
        forecast: forecast(combined_spend, total_budget, days_elapsed),
        total_recurring: round_cents(total_recurring),
    }
}

/// Derived budget aggregate persisted alongside a user's budget record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub total_budget: f64,
    pub expenses: f64,
    pub remaining: f64,
}

impl BudgetSnapshot {
    /// Recompute the snapshot from the authoritative expense total.
    ///
    /// Callers persisting this must recompute from the full expense set at
    /// write time under a per-user serialization point (mutual exclusion or
    /// a transactional recompute-and-store). Maintaining the snapshot as an
    /// incremental delta loses updates when two writes race: the second
    /// write's aggregate is computed before the first lands, and whichever
    /// lands last overwrites the other.
    pub fn recompute(total_budget: f64, expense_total: f64) -> Self {
        Self {
            total_budget,
            expenses: expense_total,
            remaining: total_budget - expense_total,
        }
    }
}

//! Linear end-of-month spend projection
//!
//! Extrapolates spend-to-date over a fixed 30-day month: average daily spend
//! so far, times the days left, on top of what was already spent.

use crate::models::ForecastResult;

/// Month length used for projection. Fixed at 30 regardless of the actual
/// calendar month; the projection trades calendar accuracy for a stable,
/// comparable estimate.
pub const PROJECTION_MONTH_DAYS: u32 = 30;

/// Round to cents. Applied at output boundaries only; intermediate math keeps
/// full precision so rounding error does not compound across categories.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project end-of-month spend from `spend_to_date` after `days_elapsed` days,
/// against `goal`.
///
/// `days_elapsed == 0` short-circuits to a degenerate result (projection
/// equals the goal, everything else zero) instead of dividing by zero.
///
/// A zero goal makes percent-of-budget undefined; in that case the result
/// carries `percent_of_budget: None` and any positive projection counts as
/// overspending, rather than letting the division produce infinities.
pub fn forecast(spend_to_date: f64, goal: f64, days_elapsed: u32) -> ForecastResult {
    if days_elapsed == 0 {
        return ForecastResult {
            current_spend: 0.0,
            projected_spend: goal,
            budget: goal,
            days_into_month: 0,
            average_daily_spend: 0.0,
            will_overspend: false,
            overspend_amount: 0.0,
            percent_of_budget: Some(0.0),
        };
    }

    let average_daily_spend = spend_to_date / f64::from(days_elapsed);
    // Past day 30 there is nothing left to extrapolate; the projection is the
    // spend itself and never goes below it.
    let remaining_days = PROJECTION_MONTH_DAYS.saturating_sub(days_elapsed);
    let projected = spend_to_date + average_daily_spend * f64::from(remaining_days);

    let (will_overspend, percent_of_budget) = if goal == 0.0 {
        (projected > 0.0, None)
    } else {
        (projected > goal, Some((projected / goal * 100.0).round()))
    };

    ForecastResult {
        current_spend: round_cents(spend_to_date),
        projected_spend: round_cents(projected),
        budget: goal,
        days_into_month: days_elapsed,
        average_daily_spend: round_cents(average_daily_spend),
        will_overspend,
        overspend_amount: round_cents((projected - goal).max(0.0)),
        percent_of_budget,
    }
}

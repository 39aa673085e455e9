//! Frequency conversion tables
//!
//! Both per-frequency tables live here so adding a frequency means touching
//! one module, not every computation site:
//! - monthly factor: how many occurrences land in a month
//! - calendar increment: one scheduling step forward from a date

use chrono::{Days, Months, NaiveDate};

use crate::models::Frequency;

impl Frequency {
    /// Occurrences per month as a fixed approximation (weekly ~4.33,
    /// biweekly ~2.17). Deliberately not calendar-exact: the factors do not
    /// change with the length of the current month.
    ///
    /// `Unrecognized` maps to 0, so an unknown frequency contributes nothing
    /// rather than erroring. That result is a no-op, not a computed value;
    /// callers that need to distinguish the two check
    /// [`Frequency::is_recognized`] first.
    pub fn monthly_factor(&self) -> f64 {
        match self {
            Self::Daily => 30.0,
            Self::Weekly => 4.33,
            Self::Biweekly => 2.17,
            Self::Monthly => 1.0,
            Self::Yearly => 1.0 / 12.0,
            Self::Unrecognized => 0.0,
        }
    }

    /// One calendar step forward from `date`.
    ///
    /// Month and year steps clamp to the last day of a shorter target month
    /// (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year), per chrono's
    /// `Months` arithmetic. The clamp is applied per step from the current
    /// candidate, so a rule anchored on the 31st drifts to the 28th once it
    /// crosses February.
    ///
    /// Returns `None` for `Unrecognized`, which excludes the rule from
    /// scheduling entirely.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Daily => date.checked_add_days(Days::new(1)),
            Self::Weekly => date.checked_add_days(Days::new(7)),
            Self::Biweekly => date.checked_add_days(Days::new(14)),
            Self::Monthly => date.checked_add_months(Months::new(1)),
            Self::Yearly => date.checked_add_months(Months::new(12)),
            Self::Unrecognized => None,
        }
    }
}

/// Monthly-equivalent amount for one recurring charge of the given frequency
pub fn monthly_equivalent(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.monthly_factor()
}

//! Recurring-rule occurrence scheduling
//!
//! Computes when a rule next fires relative to a reference date, and which
//! rules fire inside a lookahead window. Every call recomputes from the
//! rule's fixed start anchor; there is no persisted cursor.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{RecurringRule, UpcomingOccurrence};

/// Default lookahead window for upcoming-occurrence queries
pub const DEFAULT_LOOKAHEAD_DAYS: u32 = 7;

/// Next occurrence of `rule` on or after `reference`.
///
/// A start date on or after `reference` is returned as-is; future-dated rules
/// are not advanced. Otherwise the candidate steps forward by the rule's
/// frequency until it reaches `reference`. Each step strictly advances the
/// candidate, so the loop terminates.
///
/// Returns `None` for an unrecognized frequency, which excludes the rule
/// rather than looping on a zero-length step.
pub fn next_occurrence(rule: &RecurringRule, reference: NaiveDate) -> Option<NaiveDate> {
    let mut candidate = rule.start_date;
    while candidate < reference {
        candidate = rule.frequency.advance(candidate)?;
    }
    Some(candidate)
}

/// All occurrences due within `horizon_days` of `reference`.
///
/// Considers only rules that are live on `reference` (active, and either
/// open-ended or ending on/after it). Results are sorted ascending by next
/// date; ties keep input order.
pub fn upcoming(
    rules: &[RecurringRule],
    reference: NaiveDate,
    horizon_days: u32,
) -> Vec<UpcomingOccurrence> {
    let horizon_end = reference + Duration::days(i64::from(horizon_days));

    let mut occurrences: Vec<UpcomingOccurrence> = rules
        .iter()
        .filter(|rule| rule.is_live(reference))
        .filter_map(|rule| {
            let next_date = next_occurrence(rule, reference)?;
            if next_date > horizon_end {
                return None;
            }
            Some(UpcomingOccurrence {
                description: rule.description.clone(),
                category: rule.category,
                amount: rule.amount,
                next_date,
            })
        })
        .collect();

    // sort_by_key is stable; equal dates keep input order
    occurrences.sort_by_key(|occurrence| occurrence.next_date);

    debug!(
        count = occurrences.len(),
        horizon_days, "Computed upcoming occurrences"
    );

    occurrences
}

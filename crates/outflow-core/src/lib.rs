//! Outflow Core Library
//!
//! Forecasting and recurring-expense scheduling engine for the Outflow
//! budget tracker:
//! - Monthly-equivalent conversion for recurring rules of any frequency
//! - Next-occurrence scheduling and lookahead windows
//! - Linear end-of-month spend projection against budget goals
//! - Per-category recurring/variable split and forecasts
//!
//! The engine is pure computation over caller-supplied records. The
//! surrounding service owns persistence, authentication and rendering; it
//! fetches flat in-memory records and feeds them in. Nothing here performs
//! I/O, holds state between calls, or needs locking under concurrent use.

pub mod aggregate;
pub mod budget;
pub mod error;
pub mod forecast;
pub mod frequency;
pub mod models;
pub mod schedule;

pub use aggregate::{
    aggregate_by_category, monthly_impact, recurring_by_category, spend_by_category, total_spend,
};
pub use budget::{forecast_month, BudgetSnapshot, MonthForecast};
pub use error::{Error, Result};
pub use forecast::{forecast, PROJECTION_MONTH_DAYS};
pub use frequency::monthly_equivalent;
pub use models::{
    Category, CategoryForecastResult, ExpenseRecord, ForecastResult, Frequency, GoalSet,
    RecurringRule, RecurringRulePatch, UpcomingOccurrence,
};
pub use schedule::{next_occurrence, upcoming, DEFAULT_LOOKAHEAD_DAYS};

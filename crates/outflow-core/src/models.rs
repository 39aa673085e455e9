//! Domain models for Outflow

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Utilities,
    Rent,
    Entertainment,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Utilities => "utilities",
            Self::Rent => "rent",
            Self::Entertainment => "entertainment",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "utilities" => Ok(Self::Utilities),
            "rent" => Ok(Self::Rent),
            "entertainment" => Ok(Self::Entertainment),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recurring-rule billing frequency
///
/// `Unrecognized` is the serde fallback for unknown wire tags. It contributes
/// zero to monthly-equivalent math and is excluded from scheduling, so stale
/// or malformed frequency values degrade silently instead of failing the
/// whole request. Callers that want strict validation parse via `FromStr`
/// (which rejects unknown tags) or check [`Frequency::is_recognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unrecognized,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Whether this is one of the supported billing frequencies
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub user_id: String,
    pub description: String,
    /// Always non-negative; expenses are magnitudes, not signed deltas
    pub amount: f64,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseRecord {
    /// Strict input validation for callers that reject bad amounts before
    /// handing records to the engine
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// A user-defined repeating obligation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringRule {
    pub user_id: String,
    pub description: String,
    /// Always non-negative; the per-occurrence charge
    pub amount: f64,
    pub category: Category,
    pub frequency: Frequency,
    /// Fixed anchor for occurrence computation; never mutated by scheduling
    pub start_date: NaiveDate,
    /// None = open-ended
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl RecurringRule {
    /// Strict input validation: non-negative finite amount and a recognized
    /// frequency. The computation paths are lenient (unrecognized frequency
    /// degrades to a no-op); this is the opt-in strict check.
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        if !self.frequency.is_recognized() {
            return Err(Error::UnrecognizedFrequency(
                self.frequency.as_str().to_string(),
            ));
        }
        Ok(())
    }

    /// Whether this rule can still fire on `reference`: active, and not past
    /// its end date
    pub fn is_live(&self, reference: NaiveDate) -> bool {
        self.is_active && self.end_date.map_or(true, |end| end >= reference)
    }
}

/// Partial update for a recurring rule
///
/// Unset fields leave the rule unchanged; the whole patch is applied in one
/// step so request handling never does ad hoc per-field presence checks.
/// `end_date` is doubly optional: `Some(None)` clears the end date back to
/// open-ended, `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct RecurringRulePatch {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub frequency: Option<Frequency>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_active: Option<bool>,
}

impl RecurringRulePatch {
    /// Apply the patch atomically
    pub fn apply(&self, rule: &mut RecurringRule) {
        if let Some(description) = &self.description {
            rule.description = description.clone();
        }
        if let Some(amount) = self.amount {
            rule.amount = amount;
        }
        if let Some(category) = self.category {
            rule.category = category;
        }
        if let Some(frequency) = self.frequency {
            rule.frequency = frequency;
        }
        if let Some(start_date) = self.start_date {
            rule.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            rule.end_date = end_date;
        }
        if let Some(is_active) = self.is_active {
            rule.is_active = is_active;
        }
    }
}

/// Budget goals for a user: an overall monthly budget plus optional
/// per-category goals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalSet {
    pub total_budget: f64,
    /// Categories without an entry default to a goal of 0
    #[serde(default)]
    pub category_goals: HashMap<Category, f64>,
}

impl GoalSet {
    pub fn new(total_budget: f64) -> Self {
        Self {
            total_budget,
            category_goals: HashMap::new(),
        }
    }

    /// Goal for a category, defaulting to 0 when absent
    pub fn goal_for(&self, category: Category) -> f64 {
        self.category_goals.get(&category).copied().unwrap_or(0.0)
    }
}

/// End-of-month projection for a single spend figure against a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub current_spend: f64,
    pub projected_spend: f64,
    pub budget: f64,
    pub days_into_month: u32,
    pub average_daily_spend: f64,
    pub will_overspend: bool,
    /// Always non-negative
    pub overspend_amount: f64,
    /// None when the goal is zero and percent-of-budget is undefined
    pub percent_of_budget: Option<f64>,
}

/// Per-category forecast with the recurring/variable split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForecastResult {
    /// Monthly-equivalent recurring spend for the category
    pub recurring: f64,
    /// Actual spend not attributable to recurring rules, floored at zero
    pub variable: f64,
    pub projected_spend: f64,
    pub budget: f64,
    pub will_overspend: bool,
    pub overspend_amount: f64,
}

/// A recurring rule's next occurrence inside a lookahead window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingOccurrence {
    pub description: String,
    pub category: Category,
    pub amount: f64,
    pub next_date: NaiveDate,
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_rule() -> RecurringRule {
        RecurringRule {
            user_id: "user-1".to_string(),
            description: "Gym membership".to_string(),
            amount: 40.0,
            category: Category::Entertainment,
            frequency: Frequency::Monthly,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            end_date: None,
            is_active: true,
        }
    }

    #[test]
    fn test_frequency_round_trip() {
        assert_eq!(Frequency::Biweekly.as_str(), "biweekly");
        assert_eq!(Frequency::from_str("yearly").unwrap(), Frequency::Yearly);
        assert_eq!(Frequency::from_str("Monthly").unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_frequency_from_str_rejects_unknown() {
        assert!(Frequency::from_str("fortnightly").is_err());
        // The catch-all variant is not a valid user-supplied tag either
        assert!(Frequency::from_str("unrecognized").is_err());
    }

    #[test]
    fn test_frequency_serde_fallback() {
        let freq: Frequency = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(freq, Frequency::Weekly);

        // Unknown wire tags degrade instead of failing deserialization
        let freq: Frequency = serde_json::from_str("\"quarterly\"").unwrap();
        assert_eq!(freq, Frequency::Unrecognized);
        assert!(!freq.is_recognized());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("Food").unwrap(), Category::Food);
        assert_eq!(Category::from_str("rent").unwrap(), Category::Rent);
        assert!(Category::from_str("groceries").is_err());
    }

    #[test]
    fn test_rule_validate() {
        let mut rule = sample_rule();
        assert!(rule.validate().is_ok());

        rule.amount = -5.0;
        assert!(matches!(rule.validate(), Err(Error::InvalidAmount(_))));

        rule.amount = 5.0;
        rule.frequency = Frequency::Unrecognized;
        assert!(matches!(
            rule.validate(),
            Err(Error::UnrecognizedFrequency(_))
        ));
    }

    #[test]
    fn test_rule_is_live() {
        let reference = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

        let mut rule = sample_rule();
        assert!(rule.is_live(reference));

        // End date on the reference day still counts
        rule.end_date = Some(reference);
        assert!(rule.is_live(reference));

        rule.end_date = Some(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap());
        assert!(!rule.is_live(reference));

        rule.end_date = None;
        rule.is_active = false;
        assert!(!rule.is_live(reference));
    }

    #[test]
    fn test_patch_empty_is_noop() {
        let mut rule = sample_rule();
        let before = rule.clone();

        RecurringRulePatch::default().apply(&mut rule);

        assert_eq!(rule.description, before.description);
        assert_eq!(rule.amount, before.amount);
        assert_eq!(rule.category, before.category);
        assert_eq!(rule.frequency, before.frequency);
        assert_eq!(rule.start_date, before.start_date);
        assert_eq!(rule.end_date, before.end_date);
        assert_eq!(rule.is_active, before.is_active);
    }

    #[test]
    fn test_patch_applies_set_fields() {
        let mut rule = sample_rule();

        let patch = RecurringRulePatch {
            amount: Some(45.0),
            is_active: Some(false),
            ..Default::default()
        };
        patch.apply(&mut rule);

        assert_eq!(rule.amount, 45.0);
        assert!(!rule.is_active);
        // Untouched fields keep their values
        assert_eq!(rule.description, "Gym membership");
        assert_eq!(rule.frequency, Frequency::Monthly);
    }

    #[test]
    fn test_patch_clears_end_date() {
        let mut rule = sample_rule();
        rule.end_date = Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());

        let patch = RecurringRulePatch {
            end_date: Some(None),
            ..Default::default()
        };
        patch.apply(&mut rule);
        assert_eq!(rule.end_date, None);

        // Absent end_date leaves it alone
        rule.end_date = Some(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
        RecurringRulePatch::default().apply(&mut rule);
        assert!(rule.end_date.is_some());
    }

    #[test]
    fn test_goal_set_defaults_to_zero() {
        let mut goals = GoalSet::new(1000.0);
        goals.category_goals.insert(Category::Food, 300.0);

        assert_eq!(goals.goal_for(Category::Food), 300.0);
        assert_eq!(goals.goal_for(Category::Rent), 0.0);
    }
}

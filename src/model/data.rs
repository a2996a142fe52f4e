//! Records tracked by the application: purchases, income, savings plans and learning state

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Spending category chosen when a purchase is logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseCategory {
    /// Discretionary, unplanned spending
    #[serde(rename = "Unnecessary Impulse")]
    UnnecessaryImpulse,
    /// A subscription or other charge that will recur monthly
    #[serde(rename = "New Monthly Charge")]
    NewMonthlyCharge,
    /// Necessary food or clothing
    #[serde(rename = "Necessary food or clothing")]
    Necessary,
    #[serde(rename = "Miscellaneous")]
    Misc,
}

impl PurchaseCategory {
    /// Label shown to the user (and stored in JSON)
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseCategory::UnnecessaryImpulse => "Unnecessary Impulse",
            PurchaseCategory::NewMonthlyCharge => "New Monthly Charge",
            PurchaseCategory::Necessary => "Necessary food or clothing",
            PurchaseCategory::Misc => "Miscellaneous",
        }
    }

    pub fn is_impulse(&self) -> bool {
        matches!(self, PurchaseCategory::UnnecessaryImpulse)
    }
}

impl fmt::Display for PurchaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PurchaseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "impulse" | "unnecessary-impulse" | "unnecessary impulse" => {
                Ok(PurchaseCategory::UnnecessaryImpulse)
            }
            "monthly" | "new-monthly-charge" | "new monthly charge" => {
                Ok(PurchaseCategory::NewMonthlyCharge)
            }
            "necessary" | "necessary food or clothing" => Ok(PurchaseCategory::Necessary),
            "misc" | "miscellaneous" => Ok(PurchaseCategory::Misc),
            other => Err(format!("Unknown purchase category: {}", other)),
        }
    }
}

/// A single logged purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,

    /// When the purchase happened
    pub timestamp: NaiveDateTime,

    /// Amount spent (non-negative)
    pub amount: f64,

    pub category: PurchaseCategory,

    /// Where the purchase was prompted, e.g. "Instagram"
    pub platform: Option<String>,

    /// Free-text explanation
    pub note: Option<String>,

    /// User marked this purchase as impulsive
    pub impulsive: bool,
}

impl Transaction {
    pub fn new(timestamp: NaiveDateTime, amount: f64, category: PurchaseCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            amount,
            category,
            platform: None,
            note: None,
            impulsive: category.is_impulse(),
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_impulsive(mut self, impulsive: bool) -> Self {
        self.impulsive = impulsive;
        self
    }
}

/// Monthly income, effective from the first day of a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: Uuid,
    pub amount: f64,
    pub effective_month: NaiveDate,
}

impl IncomeEntry {
    /// Create an income entry; `effective` is normalized to the first of its month
    pub fn new(amount: f64, effective: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            effective_month: first_of_month(effective),
        }
    }
}

/// Kind of savings vehicle backing a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanKind {
    #[serde(rename = "Savings")]
    Savings,
    /// Tax-advantaged retirement account
    #[serde(rename = "Roth IRA")]
    RothIra,
    #[serde(rename = "Index Fund")]
    IndexFund,
    #[serde(rename = "Other Savings")]
    Other,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Savings => "Savings",
            PlanKind::RothIra => "Roth IRA",
            PlanKind::IndexFund => "Index Fund",
            PlanKind::Other => "Other Savings",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "savings" => Ok(PlanKind::Savings),
            "roth-ira" | "roth ira" | "retirement" => Ok(PlanKind::RothIra),
            "index-fund" | "index fund" => Ok(PlanKind::IndexFund),
            "other" | "other savings" => Ok(PlanKind::Other),
            other => Err(format!("Unknown plan kind: {}", other)),
        }
    }
}

/// A recurring savings contribution the user simulates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub id: Uuid,
    pub name: String,
    pub kind: PlanKind,

    /// Contribution added at the end of every month
    pub monthly_contribution: f64,

    /// Expected annual return as a fraction (0.06 = 6%)
    pub expected_annual_return: f64,

    pub start_year: i32,
}

impl SavingsPlan {
    pub fn new(
        name: impl Into<String>,
        kind: PlanKind,
        monthly_contribution: f64,
        expected_annual_return: f64,
        start_year: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            monthly_contribution,
            expected_annual_return,
            start_year,
        }
    }
}

/// Answers collected by the onboarding questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub is_immigrant_family: Option<bool>,

    /// Self-reported experience, 1 (low) to 4 (high)
    pub experience_level: Option<u8>,

    pub personalization_complete: Option<bool>,
}

impl UserProfile {
    pub fn is_personalized(&self) -> bool {
        self.personalization_complete == Some(true)
    }
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

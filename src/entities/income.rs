//! Income entity - Money received outside of member dues.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Income record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncome {
    pub id: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    /// Who the money came from
    pub source: String,
    pub description: String,
    /// Amount received, non-negative
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl OtherIncome {
    pub fn new(
        income_type: IncomeType,
        source: String,
        description: String,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: super::generate_id(),
            income_type,
            source,
            description,
            amount,
            date,
            created_at: super::now(),
        }
    }
}

/// Category of non-dues income.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeType {
    #[serde(rename = "দান")]
    Donation,
    #[serde(rename = "স্পনসরশিপ")]
    Sponsorship,
    #[serde(rename = "সরকারি অনুদান")]
    GovernmentGrant,
    #[serde(rename = "অন্যান্য")]
    Other,
}

impl IncomeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Donation => "দান",
            Self::Sponsorship => "স্পনসরশিপ",
            Self::GovernmentGrant => "সরকারি অনুদান",
            Self::Other => "অন্যান্য",
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donation" | "দান" => Ok(Self::Donation),
            "sponsorship" | "স্পনসরশিপ" => Ok(Self::Sponsorship),
            "grant" | "সরকারি অনুদান" => Ok(Self::GovernmentGrant),
            "other" | "অন্যান্য" => Ok(Self::Other),
            _ => Err(format!(
                "unknown income type '{s}' (expected donation, sponsorship, grant or other)"
            )),
        }
    }
}

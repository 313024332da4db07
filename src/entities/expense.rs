//! Expense entity - Money spent, optionally attributed to a puja.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Expense record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: ExpenseCategory,
    pub description: String,
    /// Amount spent, non-negative
    pub amount: f64,
    pub date: NaiveDate,
    /// Receipt or voucher number, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_no: Option<String>,
    /// Puja this expense belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puja_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        category: ExpenseCategory,
        description: String,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: super::generate_id(),
            category,
            description,
            amount,
            date,
            receipt_no: None,
            puja_id: None,
            created_at: super::now(),
        }
    }
}

/// The seven expense categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "প্রতিমা")]
    Idol,
    #[serde(rename = "মণ্ডপ")]
    Pavilion,
    #[serde(rename = "পুজো সামগ্রী")]
    Supplies,
    #[serde(rename = "খাবার")]
    Food,
    #[serde(rename = "আলোকসজ্জা")]
    Lighting,
    #[serde(rename = "বাজনা")]
    Music,
    #[serde(rename = "অন্যান্য")]
    Other,
}

impl ExpenseCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idol => "প্রতিমা",
            Self::Pavilion => "মণ্ডপ",
            Self::Supplies => "পুজো সামগ্রী",
            Self::Food => "খাবার",
            Self::Lighting => "আলোকসজ্জা",
            Self::Music => "বাজনা",
            Self::Other => "অন্যান্য",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idol" | "প্রতিমা" => Ok(Self::Idol),
            "pavilion" | "মণ্ডপ" => Ok(Self::Pavilion),
            "supplies" | "পুজো সামগ্রী" => Ok(Self::Supplies),
            "food" | "খাবার" => Ok(Self::Food),
            "lighting" | "আলোকসজ্জা" => Ok(Self::Lighting),
            "music" | "বাজনা" => Ok(Self::Music),
            "other" | "অন্যান্য" => Ok(Self::Other),
            _ => Err(format!(
                "unknown expense category '{s}' (expected idol, pavilion, supplies, food, \
                 lighting, music or other)"
            )),
        }
    }
}

//! Puja entity - A festival or event the organization runs.
//!
//! Pujas are referenced by contributions and (optionally) expenses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puja record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puja {
    /// Unique identifier for the puja
    pub id: String,
    /// Display name
    pub name: String,
    /// Which of the four recognized puja types this is
    #[serde(rename = "type")]
    pub puja_type: PujaType,
    /// Planned budget, non-negative
    pub budget: f64,
    /// Calendar date the puja takes place
    pub date: NaiveDate,
    /// Free-form description
    pub description: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Puja {
    pub fn new(
        name: String,
        puja_type: PujaType,
        budget: f64,
        date: NaiveDate,
        description: String,
    ) -> Self {
        Self {
            id: super::generate_id(),
            name,
            puja_type,
            budget,
            date,
            description,
            created_at: super::now(),
        }
    }
}

/// Recognized puja types. Wire values are the Bengali strings of the durable
/// schema; `FromStr` additionally accepts an ASCII keyword for CLI use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PujaType {
    #[serde(rename = "শ্যামা পূজা")]
    Shyama,
    #[serde(rename = "স্বরসতী পূজা")]
    Saraswati,
    #[serde(rename = "দূর্গা পূজা")]
    Durga,
    #[serde(rename = "অন্যান্য")]
    Other,
}

impl PujaType {
    /// The wire string, also used for display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shyama => "শ্যামা পূজা",
            Self::Saraswati => "স্বরসতী পূজা",
            Self::Durga => "দূর্গা পূজা",
            Self::Other => "অন্যান্য",
        }
    }
}

impl fmt::Display for PujaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PujaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shyama" | "শ্যামা পূজা" => Ok(Self::Shyama),
            "saraswati" | "স্বরসতী পূজা" => Ok(Self::Saraswati),
            "durga" | "দূর্গা পূজা" => Ok(Self::Durga),
            "other" | "অন্যান্য" => Ok(Self::Other),
            _ => Err(format!(
                "unknown puja type '{s}' (expected shyama, saraswati, durga or other)"
            )),
        }
    }
}

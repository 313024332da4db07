//! Contribution entity - A member's dues for a specific puja.
//!
//! Links a member to a puja with an expected amount and whatever has actually
//! been paid so far. The payment status is set by the operator, never derived
//! from the amounts; the two are allowed to disagree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contribution record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// Unique identifier for the contribution
    pub id: String,
    /// Identifier of the contributing member
    pub member_id: String,
    /// Identifier of the puja the dues are for
    pub puja_id: String,
    /// Amount due
    pub amount: f64,
    /// Amount actually paid; may exceed or fall short of `amount`
    pub paid_amount: f64,
    /// Operator-set payment status
    pub status: PaymentStatus,
    /// How the payment was made, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// When the payment was made, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Contribution {
    pub fn new(member_id: String, puja_id: String, amount: f64, paid_amount: f64) -> Self {
        Self {
            id: super::generate_id(),
            member_id,
            puja_id,
            amount,
            paid_amount,
            status: PaymentStatus::Due,
            payment_method: None,
            payment_date: None,
            notes: None,
            created_at: super::now(),
        }
    }
}

/// Operator-set payment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "পরিশোধিত")]
    Paid,
    #[serde(rename = "বকেয়া")]
    Due,
    #[serde(rename = "অতিরিক্ত বকেয়া")]
    Overdue,
}

impl PaymentStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "পরিশোধিত",
            Self::Due => "বকেয়া",
            Self::Overdue => "অতিরিক্ত বকেয়া",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" | "পরিশোধিত" => Ok(Self::Paid),
            "due" | "বকেয়া" => Ok(Self::Due),
            "overdue" | "অতিরিক্ত বকেয়া" => Ok(Self::Overdue),
            _ => Err(format!(
                "unknown payment status '{s}' (expected paid, due or overdue)"
            )),
        }
    }
}

/// How a payment was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "নগদ")]
    Cash,
    #[serde(rename = "অনলাইন")]
    Online,
    #[serde(rename = "চেক")]
    Cheque,
}

impl PaymentMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "নগদ",
            Self::Online => "অনলাইন",
            Self::Cheque => "চেক",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" | "নগদ" => Ok(Self::Cash),
            "online" | "অনলাইন" => Ok(Self::Online),
            "cheque" | "check" | "চেক" => Ok(Self::Cheque),
            _ => Err(format!(
                "unknown payment method '{s}' (expected cash, online or cheque)"
            )),
        }
    }
}

//! Member entity - A registered member of the organization.
//!
//! Members are referenced by contributions through their identifier. The
//! designation is stored as free text; the UI historically offered a fixed
//! suggestion list but never enforced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier for the member
    pub id: String,
    /// Full name, non-empty
    pub name: String,
    /// Role within the organization (e.g. "সভাপতি", "সদস্য")
    pub designation: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
    /// Optional photo as a data URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Builds a member record with a generated identifier and creation
    /// timestamp. Name validation happens in the ledger operations.
    pub fn new(name: String, designation: String, phone: String, address: String) -> Self {
        Self {
            id: super::generate_id(),
            name,
            designation,
            phone,
            address,
            photo: None,
            created_at: super::now(),
        }
    }
}

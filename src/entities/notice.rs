//! Notice entity - An announcement shown to members.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Notice record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Important notices are pinned first in listings
    pub is_important: bool,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(title: String, description: String, date: NaiveDate, is_important: bool) -> Self {
        Self {
            id: super::generate_id(),
            title,
            description,
            date,
            is_important,
            created_at: super::now(),
        }
    }
}

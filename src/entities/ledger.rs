//! Ledger aggregate - The single document every save and fetch moves whole.
//!
//! The six entity lists plus the user list and a last-updated stamp. Missing
//! lists in a decoded file default to empty so partially written or legacy
//! files still load; an empty user list is repaired with the seeded admin by
//! the caller, which knows the configured seed.

use super::{Contribution, Expense, Member, Notice, OtherIncome, Puja, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The unit of persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub pujas: Vec<Puja>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    #[serde(default)]
    pub income: Vec<OtherIncome>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
}

impl Ledger {
    /// An empty ledger seeded with the given admin account.
    pub fn seeded(admin: User) -> Self {
        Self {
            members: Vec::new(),
            pujas: Vec::new(),
            contributions: Vec::new(),
            income: Vec::new(),
            expenses: Vec::new(),
            notices: Vec::new(),
            users: vec![admin],
            last_updated: Utc::now(),
        }
    }

    /// Restores the seeded admin if the user list came back empty.
    /// List fields are already defaulted by deserialization.
    pub fn repair(&mut self, admin: impl FnOnce() -> User) {
        if self.users.is_empty() {
            self.users.push(admin());
        }
    }

    /// Stamps the last-updated time to now, done before every transmission.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::entities::{PaymentStatus, UserRole};

    fn seed_admin() -> User {
        User::new(
            "admin".to_string(),
            "secret".to_string(),
            UserRole::Admin,
            "Administrator".to_string(),
        )
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let ledger: Ledger = serde_json::from_str(r#"{"members": []}"#).unwrap();
        assert!(ledger.members.is_empty());
        assert!(ledger.pujas.is_empty());
        assert!(ledger.contributions.is_empty());
        assert!(ledger.income.is_empty());
        assert!(ledger.expenses.is_empty());
        assert!(ledger.notices.is_empty());
        assert!(ledger.users.is_empty());
    }

    #[test]
    fn repair_restores_seeded_admin_only_when_users_missing() {
        let mut ledger: Ledger = serde_json::from_str("{}").unwrap();
        ledger.repair(seed_admin);
        assert_eq!(ledger.users.len(), 1);
        assert_eq!(ledger.users[0].username, "admin");

        // A present user list is left alone.
        let before = ledger.users.clone();
        ledger.repair(seed_admin);
        assert_eq!(ledger.users, before);
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let ledger = Ledger::seeded(seed_admin());
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"lastUpdated\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("last_updated"));
    }

    #[test]
    fn enum_wire_values_match_legacy_files() {
        let mut ledger = Ledger::seeded(seed_admin());
        let mut contribution = Contribution::new(
            "m1".to_string(),
            "p1".to_string(),
            500.0,
            500.0,
        );
        contribution.status = PaymentStatus::Paid;
        ledger.contributions.push(contribution);

        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("পরিশোধিত"));
        assert!(json.contains("\"role\":\"admin\""));
    }

    #[test]
    fn ledger_round_trips_field_for_field() {
        let mut ledger = Ledger::seeded(seed_admin());
        ledger
            .members
            .push(Member::new(
                "Example Name".to_string(),
                "সদস্য".to_string(),
                "01712345678".to_string(),
                "Dhaka".to_string(),
            ));
        ledger.notices.push(Notice::new(
            "মহালয়া".to_string(),
            "ভোর ৫টায়".to_string(),
            chrono::NaiveDate::from_ymd_opt(2025, 9, 21).unwrap(),
            true,
        ));

        let json = serde_json::to_string_pretty(&ledger).unwrap();
        let decoded: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ledger);
    }
}

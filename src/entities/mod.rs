//! Entity module - Plain record types making up the persisted ledger.
//! Field names serialize in camelCase and enum values serialize as the exact
//! wire strings of the durable JSON schema, so files written by earlier
//! versions of the dashboard remain readable.

pub mod contribution;
pub mod expense;
pub mod income;
pub mod ledger;
pub mod member;
pub mod notice;
pub mod puja;
pub mod user;

pub use contribution::{Contribution, PaymentMethod, PaymentStatus};
pub use expense::{Expense, ExpenseCategory};
pub use income::{IncomeType, OtherIncome};
pub use ledger::Ledger;
pub use member::Member;
pub use notice::Notice;
pub use puja::{Puja, PujaType};
pub use user::{User, UserRole};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generates a fresh opaque record identifier.
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Creation timestamp for a record being built right now.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now()
}

//! Shared test utilities.
//!
//! Provides an in-memory [`RemoteContentStore`] with failure injection and
//! revision checking, plus builders for test entities with sensible defaults.

use crate::config::AdminSeed;
use crate::entities::{
    Contribution, Expense, ExpenseCategory, IncomeType, Ledger, Member, Notice, OtherIncome,
    PaymentStatus, Puja, PujaType,
};
use crate::errors::{Error, Result};
use crate::sync::api::{RemoteContentStore, RemoteFile};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// The admin seed used across tests.
pub fn test_seed() -> AdminSeed {
    AdminSeed {
        username: "admin".to_string(),
        password: "secret".to_string(),
        name: "Administrator".to_string(),
    }
}

/// In-memory single-file store standing in for the contents API.
///
/// Counts reads and write attempts, and can be told to fail either side or to
/// enforce revision tokens the way the real store does.
#[derive(Default)]
pub struct MemoryStore {
    file: Mutex<Option<(String, u64)>>,
    next_rev: AtomicU64,
    gets: AtomicUsize,
    puts: AtomicUsize,
    put_attempts: AtomicUsize,
    fail_get: AtomicBool,
    fail_put: AtomicBool,
    check_rev: AtomicBool,
}

impl MemoryStore {
    /// Seeds the stored file directly, bumping its revision.
    pub fn set_file(&self, content: &str) {
        let rev = self.next_rev.fetch_add(1, Ordering::SeqCst) + 1;
        *self.file.lock().unwrap() = Some((content.to_string(), rev));
    }

    pub fn file_content(&self) -> Option<String> {
        self.file.lock().unwrap().as_ref().map(|(c, _)| c.clone())
    }

    pub fn fail_gets(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_put.store(fail, Ordering::SeqCst);
    }

    /// Enables rejection of writes whose revision token is stale or missing.
    pub fn check_revisions(&self, check: bool) {
        self.check_rev.store(check, Ordering::SeqCst);
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Writes that actually landed.
    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Writes that were attempted, including failed ones.
    pub fn put_attempts(&self) -> usize {
        self.put_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteContentStore for MemoryStore {
    async fn get_file(&self, _token: &str) -> Result<Option<RemoteFile>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Error::RemoteApi {
                status: 503,
                message: "injected get failure".to_string(),
            });
        }
        Ok(self.file.lock().unwrap().as_ref().map(|(content, rev)| RemoteFile {
            content: content.clone(),
            revision: rev.to_string(),
        }))
    }

    async fn put_file(
        &self,
        _token: &str,
        content: &str,
        revision: Option<&str>,
        _message: &str,
    ) -> Result<()> {
        self.put_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_put.load(Ordering::SeqCst) {
            return Err(Error::RemoteApi {
                status: 503,
                message: "injected put failure".to_string(),
            });
        }

        let mut file = self.file.lock().unwrap();
        if self.check_rev.load(Ordering::SeqCst) {
            let current = file.as_ref().map(|(_, rev)| rev.to_string());
            if current.as_deref() != revision {
                return Err(Error::RemoteApi {
                    status: 409,
                    message: "revision token does not match".to_string(),
                });
            }
        }
        let rev = self.next_rev.fetch_add(1, Ordering::SeqCst) + 1;
        *file = Some((content.to_string(), rev));
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// A calendar date for tests.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Creates a test member with sensible defaults.
pub fn test_member(name: &str) -> Member {
    Member::new(
        name.to_string(),
        "সদস্য".to_string(),
        "01712345678".to_string(),
        "Dhaka".to_string(),
    )
}

/// Creates a test puja on the given date.
pub fn test_puja(name: &str, on: NaiveDate) -> Puja {
    Puja::new(name.to_string(), PujaType::Durga, 50_000.0, on, String::new())
}

/// Creates a test contribution linking a member and a puja.
pub fn test_contribution(
    member_id: &str,
    puja_id: &str,
    amount: f64,
    paid: f64,
    status: PaymentStatus,
) -> Contribution {
    let mut contribution =
        Contribution::new(member_id.to_string(), puja_id.to_string(), amount, paid);
    contribution.status = status;
    contribution
}

/// Creates a test expense, optionally attributed to a puja.
pub fn test_expense(amount: f64, on: NaiveDate, puja_id: Option<&str>) -> Expense {
    let mut expense = Expense::new(
        ExpenseCategory::Supplies,
        "Test expense".to_string(),
        amount,
        on,
    );
    expense.puja_id = puja_id.map(str::to_string);
    expense
}

/// Creates a test income record.
pub fn test_income(amount: f64, on: NaiveDate) -> OtherIncome {
    OtherIncome::new(
        IncomeType::Donation,
        "Test donor".to_string(),
        String::new(),
        amount,
        on,
    )
}

/// Creates a test notice.
pub fn test_notice(title: &str, on: NaiveDate, important: bool) -> Notice {
    Notice::new(title.to_string(), String::new(), on, important)
}

/// An empty ledger seeded with the test admin.
pub fn test_ledger() -> Ledger {
    Ledger::seeded(test_seed().to_user())
}

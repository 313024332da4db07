//! Dashboard aggregation - read-only figures derived from the current ledger.
//!
//! Everything here is recomputed from the in-memory lists on each call;
//! nothing is cached.

use crate::entities::{Ledger, Puja};
use chrono::NaiveDate;

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_members: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    /// Other income plus received contributions, minus expenses.
    pub balance: f64,
    pub total_contributions_expected: f64,
    pub total_contributions_received: f64,
    pub total_contributions_pending: f64,
}

/// Computes the headline figures.
pub fn dashboard_stats(ledger: &Ledger) -> DashboardStats {
    let total_income: f64 = ledger.income.iter().map(|i| i.amount).sum();
    let total_expenses: f64 = ledger.expenses.iter().map(|e| e.amount).sum();
    let total_contributions_expected: f64 =
        ledger.contributions.iter().map(|c| c.amount).sum();
    let total_contributions_received: f64 =
        ledger.contributions.iter().map(|c| c.paid_amount).sum();

    DashboardStats {
        total_members: ledger.members.len(),
        total_income,
        total_expenses,
        balance: total_income + total_contributions_received - total_expenses,
        total_contributions_expected,
        total_contributions_received,
        total_contributions_pending: total_contributions_expected
            - total_contributions_received,
    }
}

/// Pujas on or after `today`, soonest first, at most five.
pub fn upcoming_pujas<'a>(pujas: &'a [Puja], today: NaiveDate) -> Vec<&'a Puja> {
    let mut upcoming: Vec<&Puja> = pujas.iter().filter(|p| p.date >= today).collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.truncate(5);
    upcoming
}

/// One line of the recent-transactions feed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Income and expenses merged, newest first, at most five.
pub fn recent_transactions(ledger: &Ledger) -> Vec<RecentTransaction> {
    let mut transactions: Vec<RecentTransaction> = ledger
        .income
        .iter()
        .map(|i| RecentTransaction {
            date: i.date,
            description: i.source.clone(),
            amount: i.amount,
            kind: TransactionKind::Income,
        })
        .chain(ledger.expenses.iter().map(|e| RecentTransaction {
            date: e.date,
            description: e.description.clone(),
            amount: e.amount,
            kind: TransactionKind::Expense,
        }))
        .collect();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions.truncate(5);
    transactions
}

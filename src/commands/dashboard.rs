//! Dashboard command - the headline figures and the two top-5 feeds.

use super::taka;
use crate::core::dashboard::{self, TransactionKind};
use crate::errors::Result;
use crate::state::AppState;
use chrono::Local;

pub async fn run(state: &AppState) -> Result<()> {
    let ledger = state.snapshot().await;
    let stats = dashboard::dashboard_stats(&ledger);

    println!("Members:                 {}", stats.total_members);
    println!("Other income:            {}", taka(stats.total_income));
    println!("Expenses:                {}", taka(stats.total_expenses));
    println!("Contributions expected:  {}", taka(stats.total_contributions_expected));
    println!("Contributions received:  {}", taka(stats.total_contributions_received));
    println!("Contributions pending:   {}", taka(stats.total_contributions_pending));
    println!("Balance:                 {}", taka(stats.balance));

    let today = Local::now().date_naive();
    let upcoming = dashboard::upcoming_pujas(&ledger.pujas, today);
    println!("\nUpcoming pujas:");
    if upcoming.is_empty() {
        println!("  none");
    }
    for puja in upcoming {
        println!("  {}  {}  ({})", puja.date, puja.name, puja.puja_type);
    }

    let recent = dashboard::recent_transactions(&ledger);
    println!("\nRecent transactions:");
    if recent.is_empty() {
        println!("  none");
    }
    for tx in recent {
        let sign = match tx.kind {
            TransactionKind::Income => "+",
            TransactionKind::Expense => "-",
        };
        println!("  {}  {}{}  {}", tx.date, sign, taka(tx.amount), tx.description);
    }
    Ok(())
}

//! Income and expense subcommands.

use super::{confirm, taka};
use crate::core::finance;
use crate::entities::{ExpenseCategory, IncomeType};
use crate::errors::Result;
use crate::state::AppState;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum IncomeAction {
    /// Record income
    Add {
        #[arg(long)]
        source: String,
        /// donation, sponsorship, grant or other
        #[arg(long, default_value = "donation")]
        kind: IncomeType,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List income, newest first
    List,
    /// Remove an income record
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExpenseAction {
    /// Record an expense
    Add {
        #[arg(long)]
        description: String,
        /// idol, pavilion, supplies, food, lighting, music or other
        #[arg(long, default_value = "other")]
        category: ExpenseCategory,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        receipt: Option<String>,
        /// Puja this expense belongs to
        #[arg(long)]
        puja: Option<String>,
    },
    /// List expenses, optionally narrowed to a puja
    List {
        #[arg(long)]
        puja: Option<String>,
    },
    /// Remove an expense
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_income(state: &AppState, action: IncomeAction) -> Result<()> {
    match action {
        IncomeAction::Add {
            source,
            kind,
            amount,
            date,
            description,
        } => {
            state.require_admin().await?;
            let income = state
                .mutate(|ledger| {
                    finance::add_income(ledger, kind, &source, &description, amount, date)
                })
                .await?;
            println!("Recorded {} from {}", taka(income.amount), income.source);
        }
        IncomeAction::List => {
            let ledger = state.snapshot().await;
            if ledger.income.is_empty() {
                println!("No income recorded.");
                return Ok(());
            }
            let mut rows: Vec<_> = ledger.income.iter().collect();
            rows.sort_by(|a, b| b.date.cmp(&a.date));
            for i in rows {
                println!(
                    "{}  {}  {}  {}  {}",
                    i.id,
                    i.date,
                    i.income_type,
                    i.source,
                    taka(i.amount)
                );
            }
        }
        IncomeAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove income {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            let income = state.mutate(|ledger| finance::remove_income(ledger, &id)).await?;
            println!("Removed income from {}", income.source);
        }
    }
    Ok(())
}

pub async fn run_expense(state: &AppState, action: ExpenseAction) -> Result<()> {
    match action {
        ExpenseAction::Add {
            description,
            category,
            amount,
            date,
            receipt,
            puja,
        } => {
            state.require_admin().await?;
            let expense = state
                .mutate(|ledger| {
                    finance::add_expense(ledger, category, &description, amount, date, receipt, puja)
                })
                .await?;
            println!("Recorded {} for {}", taka(expense.amount), expense.description);
        }
        ExpenseAction::List { puja } => {
            let ledger = state.snapshot().await;
            let rows: Vec<_> = match &puja {
                Some(puja_id) => finance::expenses_for_puja(&ledger.expenses, puja_id),
                None => {
                    let mut all: Vec<_> = ledger.expenses.iter().collect();
                    all.sort_by(|a, b| b.date.cmp(&a.date));
                    all
                }
            };
            if rows.is_empty() {
                println!("No expenses found.");
                return Ok(());
            }
            for e in rows {
                println!(
                    "{}  {}  {}  {}  {}",
                    e.id,
                    e.date,
                    e.category,
                    e.description,
                    taka(e.amount)
                );
            }
        }
        ExpenseAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove expense {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            let expense = state.mutate(|ledger| finance::remove_expense(ledger, &id)).await?;
            println!("Removed expense {}", expense.description);
        }
    }
    Ok(())
}

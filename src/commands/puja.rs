//! Puja subcommands.

use super::{confirm, taka};
use crate::core::puja::{self, PujaUpdate};
use crate::entities::PujaType;
use crate::errors::Result;
use crate::state::AppState;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum PujaAction {
    /// Add a puja
    Add {
        name: String,
        /// shyama, saraswati, durga or other
        #[arg(long, default_value = "other")]
        kind: PujaType,
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Calendar date, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List pujas, optionally filtered
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Update fields of a puja
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        kind: Option<PujaType>,
        #[arg(long)]
        budget: Option<f64>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a puja
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, action: PujaAction) -> Result<()> {
    match action {
        PujaAction::Add {
            name,
            kind,
            budget,
            date,
            description,
        } => {
            state.require_admin().await?;
            let puja = state
                .mutate(|ledger| puja::add_puja(ledger, &name, kind, budget, date, &description))
                .await?;
            println!("Added {} ({}) on {}", puja.name, puja.puja_type, puja.date);
        }
        PujaAction::List { filter } => {
            let ledger = state.snapshot().await;
            let pujas = puja::filter_pujas(&ledger.pujas, &filter);
            if pujas.is_empty() {
                println!("No pujas found.");
                return Ok(());
            }
            for p in pujas {
                println!(
                    "{}  {}  {}  {}  budget {}",
                    p.id,
                    p.name,
                    p.puja_type,
                    p.date,
                    taka(p.budget)
                );
            }
        }
        PujaAction::Update {
            id,
            name,
            kind,
            budget,
            date,
            description,
        } => {
            state.require_admin().await?;
            let update = PujaUpdate {
                name,
                puja_type: kind,
                budget,
                date,
                description,
            };
            let puja = state
                .mutate(|ledger| puja::update_puja(ledger, &id, update))
                .await?;
            println!("Updated puja {}", puja.name);
        }
        PujaAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove puja {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            let puja = state.mutate(|ledger| puja::remove_puja(ledger, &id)).await?;
            println!("Removed puja {}", puja.name);
        }
    }
    Ok(())
}

//! Contribution subcommands.

use super::{confirm, taka};
use crate::core::contribution::{self, ContributionUpdate};
use crate::entities::{PaymentMethod, PaymentStatus};
use crate::errors::Result;
use crate::state::AppState;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ContributionAction {
    /// Record dues for a member and puja
    Add {
        #[arg(long)]
        member: String,
        #[arg(long)]
        puja: String,
        #[arg(long)]
        amount: f64,
        #[arg(long, default_value_t = 0.0)]
        paid: f64,
        /// paid, due or overdue
        #[arg(long, default_value = "due")]
        status: PaymentStatus,
    },
    /// List contributions, optionally narrowed to a puja or member
    List {
        #[arg(long)]
        puja: Option<String>,
        #[arg(long)]
        member: Option<String>,
    },
    /// Update a contribution
    Update {
        id: String,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        paid: Option<f64>,
        #[arg(long)]
        status: Option<PaymentStatus>,
        /// cash, online or cheque
        #[arg(long)]
        method: Option<PaymentMethod>,
        #[arg(long)]
        paid_on: Option<NaiveDate>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a contribution
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, action: ContributionAction) -> Result<()> {
    match action {
        ContributionAction::Add {
            member,
            puja,
            amount,
            paid,
            status,
        } => {
            state.require_admin().await?;
            let contribution = state
                .mutate(|ledger| {
                    contribution::add_contribution(ledger, &member, &puja, amount, paid, status)
                })
                .await?;
            println!(
                "Recorded {} due / {} paid ({})",
                taka(contribution.amount),
                taka(contribution.paid_amount),
                contribution.status
            );
        }
        ContributionAction::List { puja, member } => {
            let ledger = state.snapshot().await;
            let rows: Vec<_> = match (&puja, &member) {
                (Some(puja_id), _) => {
                    contribution::contributions_for_puja(&ledger.contributions, puja_id)
                }
                (None, Some(member_id)) => {
                    contribution::contributions_for_member(&ledger.contributions, member_id)
                }
                (None, None) => ledger.contributions.iter().collect(),
            };
            if rows.is_empty() {
                println!("No contributions found.");
                return Ok(());
            }
            for c in rows {
                println!(
                    "{}  member {}  puja {}  {} / {}  {}",
                    c.id,
                    c.member_id,
                    c.puja_id,
                    taka(c.paid_amount),
                    taka(c.amount),
                    c.status
                );
            }
        }
        ContributionAction::Update {
            id,
            amount,
            paid,
            status,
            method,
            paid_on,
            notes,
        } => {
            state.require_admin().await?;
            let update = ContributionUpdate {
                amount,
                paid_amount: paid,
                status,
                payment_method: method,
                payment_date: paid_on,
                notes,
            };
            let contribution = state
                .mutate(|ledger| contribution::update_contribution(ledger, &id, update))
                .await?;
            println!(
                "Updated contribution: {} / {} ({})",
                taka(contribution.paid_amount),
                taka(contribution.amount),
                contribution.status
            );
        }
        ContributionAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove contribution {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            state
                .mutate(|ledger| contribution::remove_contribution(ledger, &id))
                .await?;
            println!("Removed contribution {id}");
        }
    }
    Ok(())
}

//! Member subcommands.

use super::confirm;
use crate::core::member::{self, MemberUpdate};
use crate::errors::Result;
use crate::state::AppState;
use clap::Subcommand;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum MemberAction {
    /// Add a member
    Add {
        name: String,
        #[arg(long, default_value = "সদস্য")]
        designation: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// List members, optionally filtered
    List {
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Update fields of a member
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        designation: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Remove a member
    Remove {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, action: MemberAction) -> Result<()> {
    match action {
        MemberAction::Add {
            name,
            designation,
            phone,
            address,
        } => {
            state.require_admin().await?;
            let member = state
                .mutate(|ledger| {
                    member::add_member(ledger, &name, &designation, &phone, &address)
                })
                .await?;
            info!("Member {} added", member.id);
            println!("Added member {} ({})", member.name, member.id);
        }
        MemberAction::List { filter } => {
            let ledger = state.snapshot().await;
            let members = member::filter_members(&ledger.members, &filter);
            if members.is_empty() {
                println!("No members found.");
                return Ok(());
            }
            for m in members {
                println!("{}  {}  {}  {}  {}", m.id, m.name, m.designation, m.phone, m.address);
            }
        }
        MemberAction::Update {
            id,
            name,
            designation,
            phone,
            address,
        } => {
            state.require_admin().await?;
            let update = MemberUpdate {
                name,
                designation,
                phone,
                address,
                photo: None,
            };
            let member = state
                .mutate(|ledger| member::update_member(ledger, &id, update))
                .await?;
            println!("Updated member {}", member.name);
        }
        MemberAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove member {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            let member = state
                .mutate(|ledger| member::remove_member(ledger, &id))
                .await?;
            println!("Removed member {}", member.name);
        }
    }
    Ok(())
}

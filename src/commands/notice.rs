//! Notice subcommands.

use super::confirm;
use crate::core::notice;
use crate::errors::Result;
use crate::state::AppState;
use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum NoticeAction {
    /// Post a notice
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        date: NaiveDate,
        /// Pin as important
        #[arg(long)]
        important: bool,
    },
    /// List notices, newest first
    List,
    /// Remove a notice
    Remove {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, action: NoticeAction) -> Result<()> {
    match action {
        NoticeAction::Add {
            title,
            description,
            date,
            important,
        } => {
            state.require_admin().await?;
            let notice = state
                .mutate(|ledger| notice::add_notice(ledger, &title, &description, date, important))
                .await?;
            println!("Posted notice: {}", notice.title);
        }
        NoticeAction::List => {
            let ledger = state.snapshot().await;
            let notices = notice::sorted_notices(&ledger.notices);
            if notices.is_empty() {
                println!("No notices.");
                return Ok(());
            }
            for n in notices {
                let marker = if n.is_important { "!" } else { " " };
                println!("{} {}  {}  {}", marker, n.id, n.date, n.title);
            }
        }
        NoticeAction::Remove { id, yes } => {
            state.require_admin().await?;
            if !yes && !confirm(&format!("Remove notice {id}?")) {
                println!("Cancelled.");
                return Ok(());
            }
            let notice = state.mutate(|ledger| notice::remove_notice(ledger, &id)).await?;
            println!("Removed notice {}", notice.title);
        }
    }
    Ok(())
}

//! Report commands - build the rows and write the CSV file.

use crate::core::report;
use crate::errors::Result;
use crate::state::AppState;
use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum ReportKind {
    /// Member roster
    Roster {
        #[arg(long, default_value = "সদস্য_তালিকা.csv")]
        out: PathBuf,
    },
    /// Outstanding dues
    Dues {
        #[arg(long, default_value = "বকেয়া_চাঁদা.csv")]
        out: PathBuf,
    },
    /// Full income/expense statement
    Statement {
        #[arg(long, default_value = "সম্পূর্ণ_হিসাব.csv")]
        out: PathBuf,
    },
    /// Per-member dues summary
    Summary {
        #[arg(long, default_value = "চাঁদা_সারাংশ.csv")]
        out: PathBuf,
    },
}

pub async fn run(state: &AppState, kind: ReportKind) -> Result<()> {
    let ledger = state.snapshot().await;
    let (path, csv) = match kind {
        ReportKind::Roster { out } => {
            let rows = report::member_roster(&ledger.members);
            (out, report::roster_csv(&rows))
        }
        ReportKind::Dues { out } => {
            let rows = report::due_list(&ledger);
            (out, report::due_list_csv(&rows))
        }
        ReportKind::Statement { out } => {
            let statement = report::full_statement(&ledger);
            (out, report::statement_csv(&statement))
        }
        ReportKind::Summary { out } => {
            let rows = report::dues_summary(&ledger);
            (out, report::dues_summary_csv(&rows))
        }
    };

    std::fs::write(&path, csv)?;
    info!("Report written to {:?}", path);
    println!("Wrote {}", path.display());
    Ok(())
}

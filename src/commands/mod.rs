//! Command-line surface - one subcommand per dashboard tab, plus session and
//! sync management. Handlers are thin: parse, check the role, call into core
//! through [`AppState`], print.

pub mod contribution;
pub mod dashboard;
pub mod finance;
pub mod member;
pub mod notice;
pub mod puja;
pub mod report;
pub mod session;
pub mod sync;

use crate::errors::Result;
use crate::state::AppState;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Community organization ledger with GitHub-backed synchronization.
#[derive(Debug, Parser)]
#[command(name = "puja-khata", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage members
    Member {
        #[command(subcommand)]
        action: member::MemberAction,
    },
    /// Manage pujas
    Puja {
        #[command(subcommand)]
        action: puja::PujaAction,
    },
    /// Manage dues contributions
    Contribution {
        #[command(subcommand)]
        action: contribution::ContributionAction,
    },
    /// Manage other income
    Income {
        #[command(subcommand)]
        action: finance::IncomeAction,
    },
    /// Manage expenses
    Expense {
        #[command(subcommand)]
        action: finance::ExpenseAction,
    },
    /// Manage notices
    Notice {
        #[command(subcommand)]
        action: notice::NoticeAction,
    },
    /// Show the dashboard figures
    Dashboard,
    /// Write a CSV report
    Report {
        #[command(subcommand)]
        kind: report::ReportKind,
    },
    /// Remote sync management
    Sync {
        #[command(subcommand)]
        action: sync::SyncAction,
    },
    /// Sign in (or browse read-only with --viewer)
    Login {
        #[arg(required_unless_present = "viewer")]
        username: Option<String>,
        #[arg(required_unless_present = "viewer")]
        password: Option<String>,
        /// Browse without credentials, read-only
        #[arg(long)]
        viewer: bool,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: session::UserAction,
    },
}

/// Routes a parsed command to its handler.
pub async fn dispatch(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Member { action } => member::run(state, action).await,
        Command::Puja { action } => puja::run(state, action).await,
        Command::Contribution { action } => contribution::run(state, action).await,
        Command::Income { action } => finance::run_income(state, action).await,
        Command::Expense { action } => finance::run_expense(state, action).await,
        Command::Notice { action } => notice::run(state, action).await,
        Command::Dashboard => dashboard::run(state).await,
        Command::Report { kind } => report::run(state, kind).await,
        Command::Sync { action } => sync::run(state, action).await,
        Command::Login {
            username,
            password,
            viewer,
        } => session::login(state, username, password, viewer).await,
        Command::Logout => session::logout(state).await,
        Command::Whoami => session::whoami(state).await,
        Command::User { action } => session::run_user(state, action).await,
    }
}

/// Blocking yes/no prompt gating destructive actions.
pub(crate) fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N]: ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

/// Currency formatting for terminal output.
pub(crate) fn taka(amount: f64) -> String {
    format!("৳{amount:.2}")
}

//! Sync management - token entry, manual push, status.

use crate::errors::Result;
use crate::state::AppState;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum SyncAction {
    /// Store the GitHub access token
    Login {
        /// Personal access token with repo contents access
        token: String,
    },
    /// Forget the stored token and cached data
    Logout,
    /// Push the current ledger to the remote immediately
    Now,
    /// Show the sync configuration and state
    Status,
}

pub async fn run(state: &AppState, action: SyncAction) -> Result<()> {
    match action {
        SyncAction::Login { token } => {
            let Some(client) = state.sync_client() else {
                println!("No [remote] repository configured; add one to khata.toml first.");
                return Ok(());
            };
            client.initialize(token).await;
            println!("Token stored. Data will sync on the next change.");
        }
        SyncAction::Logout => {
            if let Some(client) = state.sync_client() {
                client.clear_token().await;
            }
            println!("Token cleared; running local-only.");
        }
        SyncAction::Now => {
            if state.sync_now().await {
                println!("Synced.");
            } else {
                println!("Sync failed; data is kept locally and will retry.");
            }
        }
        SyncAction::Status => {
            match state.sync_client() {
                None => println!("Remote sync: not configured"),
                Some(client) => {
                    if client.is_initialized().await {
                        println!("Remote sync: configured, token present");
                    } else {
                        println!("Remote sync: configured, no token (run `sync login <token>`)");
                    }
                }
            }
            if let Some(status) = state.sync_status() {
                println!("Engine status: {:?}", *status.borrow());
            }
            let ledger = state.snapshot().await;
            println!("Last updated: {}", ledger.last_updated.to_rfc3339());
        }
    }
    Ok(())
}

use clap::Parser;
use dotenvy::dotenv;
use puja_khata::commands::{self, Cli};
use puja_khata::config;
use puja_khata::errors::Result;
use puja_khata::state::AppState;
use puja_khata::store::LocalStore;
use puja_khata::sync::{GitHubContents, SyncClient};
use std::{env, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally

    let cli = Cli::parse();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()?;

    // 4. Open the local store
    let local = LocalStore::new(&app_config.storage.data_dir)
        .inspect(|store| info!("Local store at {:?}", store.data_dir()))?;

    // 5. Wire up remote sync when a repository is configured
    let client = match &app_config.remote {
        Some(remote) => {
            info!("Remote sync against {}/{}", remote.owner, remote.repo);
            let contents = GitHubContents::new(remote.clone())?;
            Some(Arc::new(SyncClient::new(
                Arc::new(contents),
                local.clone(),
                app_config.admin.clone(),
            )))
        }
        None => None,
    };
    if let (Some(client), Ok(token)) = (&client, env::var("GITHUB_TOKEN")) {
        client.set_transient_token(token).await;
    }

    // 6. Load state and run the command
    let state = AppState::new(local, app_config.admin.clone(), client);
    state.load().await;
    commands::dispatch(&state, cli.command).await?;

    // 7. Land any edit still inside the debounce window before exiting
    if !state.flush_if_dirty().await {
        warn!("Remote sync failed; the change is kept locally and will sync later");
    }

    Ok(())
}

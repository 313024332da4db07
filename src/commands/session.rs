//! Session and user-account commands.

use crate::core::auth::AuthOutcome;
use crate::entities::UserRole;
use crate::errors::Result;
use crate::state::AppState;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// Create a user account
    Add {
        username: String,
        password: String,
        /// admin or viewer
        #[arg(long, default_value = "viewer")]
        role: UserRole,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// List usernames and roles
    List,
}

pub async fn login(
    state: &AppState,
    username: Option<String>,
    password: Option<String>,
    viewer: bool,
) -> Result<()> {
    if viewer {
        state.viewer_session().await;
        println!("Browsing read-only as viewer.");
        return Ok(());
    }
    // clap enforces presence when --viewer is absent.
    let (username, password) = (username.unwrap_or_default(), password.unwrap_or_default());
    match state.login(&username, &password).await {
        AuthOutcome::Granted(user) => println!("Signed in as {} ({})", user.username, user.role),
        AuthOutcome::InvalidCredentials => println!("ভুল ইউজারনেম বা পাসওয়ার্ড!"),
    }
    Ok(())
}

pub async fn logout(state: &AppState) -> Result<()> {
    state.logout().await;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(state: &AppState) -> Result<()> {
    match state.session().await {
        Some(session) => println!("{} ({})", session.username, session.role),
        None => println!("Not signed in."),
    }
    Ok(())
}

pub async fn run_user(state: &AppState, action: UserAction) -> Result<()> {
    match action {
        UserAction::Add {
            username,
            password,
            role,
            name,
        } => {
            state.require_admin().await?;
            let user = state
                .mutate(|ledger| {
                    crate::core::auth::create_user(ledger, &username, &password, role, &name)
                })
                .await?;
            println!("Created user {} ({})", user.username, user.role);
        }
        UserAction::List => {
            let ledger = state.snapshot().await;
            for user in &ledger.users {
                println!("{}  {}  {}", user.id, user.username, user.role);
            }
        }
    }
    Ok(())
}

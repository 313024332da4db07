//! Application state - the in-memory ledger, the signed-in session, and the
//! routing of every mutation into local and remote persistence.
//!
//! Mutations go through [`AppState::mutate`]: apply to the shared ledger,
//! write the local blob synchronously, and nudge the sync engine so the
//! change rides the next coalesced remote write. Session changes persist
//! unconditionally, remote or not.

use crate::config::AdminSeed;
use crate::core::auth::{self, AuthOutcome};
use crate::entities::{Ledger, UserRole};
use crate::errors::{Error, Result};
use crate::store::{self, LocalStore};
use crate::sync::{FetchOutcome, SyncClient, SyncEngine, SyncStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};
use tracing::{info, warn};

/// The signed-in user, as persisted between runs. Deliberately holds no
/// password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub role: UserRole,
}

/// Where [`AppState::load`] got its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Remote,
    /// Remote was configured but unreachable; local data (or a seeded
    /// default) is in effect.
    LocalFallback,
    Local,
}

/// Orchestrates the ledger, session and persistence.
pub struct AppState {
    ledger: Arc<RwLock<Ledger>>,
    session: RwLock<Option<Session>>,
    local: LocalStore,
    admin: AdminSeed,
    client: Option<Arc<SyncClient>>,
    engine: Option<SyncEngine>,
    loaded: AtomicBool,
    dirty: AtomicBool,
}

impl AppState {
    /// Builds the state controller. When a sync client is given, the
    /// coalesced-write engine is started over the shared ledger.
    pub fn new(local: LocalStore, admin: AdminSeed, client: Option<Arc<SyncClient>>) -> Self {
        let ledger = Arc::new(RwLock::new(Ledger::seeded(admin.to_user())));
        let engine = client
            .as_ref()
            .map(|client| SyncEngine::start(Arc::clone(client), Arc::clone(&ledger)));
        Self {
            ledger,
            session: RwLock::new(None),
            local,
            admin,
            client,
            engine,
            loaded: AtomicBool::new(false),
            dirty: AtomicBool::new(false),
        }
    }

    /// Loads the ledger (remote first when configured, local otherwise) and
    /// the persisted session. Must run before mutations; until it completes,
    /// mutations apply in memory only.
    pub async fn load(&self) -> LoadSource {
        let mut source = LoadSource::Local;

        if let Some(client) = &self.client {
            match client.fetch_ledger().await {
                FetchOutcome::Unconfigured => {
                    info!("Remote sync configured but no token; using local data");
                    self.load_local().await;
                }
                FetchOutcome::Degraded(fallback) => {
                    // Last-known-good beats a synthesized empty ledger: only
                    // take the fallback when nothing is stored locally.
                    warn!("Remote fetch degraded; falling back to local data");
                    match self.local.load::<Ledger>(store::DATA_KEY) {
                        Some(ledger) => *self.ledger.write().await = ledger,
                        None => *self.ledger.write().await = fallback,
                    }
                    source = LoadSource::LocalFallback;
                }
                FetchOutcome::Created(ledger) | FetchOutcome::Existing(ledger) => {
                    self.local.save(store::BACKUP_KEY, &ledger);
                    *self.ledger.write().await = ledger;
                    source = LoadSource::Remote;
                }
            }
        } else {
            self.load_local().await;
        }

        let session = self
            .local
            .load::<Option<Session>>(store::SESSION_KEY)
            .flatten();
        *self.session.write().await = session;

        self.loaded.store(true, Ordering::SeqCst);
        source
    }

    async fn load_local(&self) {
        let ledger = self
            .local
            .load(store::DATA_KEY)
            .unwrap_or_else(|| Ledger::seeded(self.admin.to_user()));
        *self.ledger.write().await = ledger;
    }

    /// Applies a mutation to the ledger. On success the local blob is written
    /// immediately and the sync engine is nudged; on error nothing is
    /// persisted.
    pub async fn mutate<T>(&self, f: impl FnOnce(&mut Ledger) -> Result<T>) -> Result<T> {
        let mut ledger = self.ledger.write().await;
        let value = f(&mut ledger)?;

        if self.loaded.load(Ordering::SeqCst) {
            self.local.save(store::DATA_KEY, &*ledger);
            if let Some(engine) = &self.engine {
                engine.note_change();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        Ok(value)
    }

    /// A clone of the current ledger for read-only work.
    pub async fn snapshot(&self) -> Ledger {
        self.ledger.read().await.clone()
    }

    /// The current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn set_session(&self, session: Option<Session>) {
        self.local.save(store::SESSION_KEY, &session);
        *self.session.write().await = session;
    }

    /// Attempts a credential login against the ledger's user list, recording
    /// the session on success.
    pub async fn login(&self, username: &str, password: &str) -> AuthOutcome {
        let outcome = {
            let ledger = self.ledger.read().await;
            auth::authenticate(&ledger.users, username, password)
        };
        if let AuthOutcome::Granted(user) = &outcome {
            info!("User {} signed in as {}", user.username, user.role);
            self.set_session(Some(Session {
                username: user.username.clone(),
                role: user.role,
            }))
            .await;
        }
        outcome
    }

    /// Starts a read-only session without credentials.
    pub async fn viewer_session(&self) {
        self.set_session(Some(Session {
            username: "viewer".to_string(),
            role: UserRole::Viewer,
        }))
        .await;
    }

    /// Ends the session.
    pub async fn logout(&self) {
        self.set_session(None).await;
    }

    /// Errors unless the current session has the admin role.
    pub async fn require_admin(&self) -> Result<()> {
        match self.session().await {
            Some(session) if session.role == UserRole::Admin => Ok(()),
            Some(_) => Err(Error::Validation {
                message: "This action requires the admin role".to_string(),
            }),
            None => Err(Error::Validation {
                message: "Not signed in; run `login` first".to_string(),
            }),
        }
    }

    /// Pushes the current ledger to the remote immediately, bypassing the
    /// debounce. `false` when remote sync is not set up or the save failed.
    pub async fn sync_now(&self) -> bool {
        match &self.engine {
            Some(engine) => {
                let ok = engine.flush_now().await;
                if ok {
                    self.dirty.store(false, Ordering::SeqCst);
                }
                ok
            }
            None => false,
        }
    }

    /// Flushes unsynced changes before shutdown, so a short-lived invocation
    /// does not exit inside the debounce window with its edit still local.
    /// `true` when there was nothing to flush or the flush succeeded.
    pub async fn flush_if_dirty(&self) -> bool {
        if !self.dirty.load(Ordering::SeqCst) {
            return true;
        }
        self.sync_now().await
    }

    /// Observable sync status, when remote sync is set up.
    pub fn sync_status(&self) -> Option<watch::Receiver<SyncStatus>> {
        self.engine.as_ref().map(SyncEngine::status)
    }

    /// The sync client, when remote sync is set up.
    pub fn sync_client(&self) -> Option<&Arc<SyncClient>> {
        self.client.as_ref()
    }
}

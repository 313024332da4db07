//! The sync client - credential, read cache and the fail-open fetch/save
//! contract over a [`RemoteContentStore`].
//!
//! Fetching never fails: every outcome except "not configured" carries a
//! complete ledger, synthesized from the configured seed when the remote is
//! unreachable. Saving reports plain success or failure; a failure leaves the
//! caller's data untouched and the UI degrades to a "sync failed" indicator.

use super::api::RemoteContentStore;
use crate::config::AdminSeed;
use crate::entities::Ledger;
use crate::store::{self, LocalStore};
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

/// How long a fetched ledger is served from memory before the remote is
/// consulted again.
const CACHE_DURATION: Duration = Duration::from_secs(60);

/// Result of [`SyncClient::fetch_ledger`].
///
/// Every variant is usable as-is, but they stay distinct so callers and tests
/// can tell an established remote file from a synthesized fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// No credential is held in memory or in the local store.
    Unconfigured,
    /// The remote file did not exist; a seeded ledger was created and
    /// persisted, establishing it.
    Created(Ledger),
    /// The remote file existed and decoded (with missing lists repaired).
    /// Also returned for cache hits.
    Existing(Ledger),
    /// The remote failed transiently; this is a fresh seeded ledger, not
    /// remote state, and nothing was cached.
    Degraded(Ledger),
}

impl FetchOutcome {
    /// The carried ledger, `None` only for [`FetchOutcome::Unconfigured`].
    pub fn into_ledger(self) -> Option<Ledger> {
        match self {
            Self::Unconfigured => None,
            Self::Created(ledger) | Self::Existing(ledger) | Self::Degraded(ledger) => {
                Some(ledger)
            }
        }
    }
}

struct CachedLedger {
    ledger: Ledger,
    fetched_at: Instant,
}

/// Remote persistence adapter.
///
/// Explicitly constructed and passed where needed; holds its credential,
/// cache and seed as instance state rather than living in a global.
pub struct SyncClient {
    remote: Arc<dyn RemoteContentStore>,
    local: LocalStore,
    admin: AdminSeed,
    token: RwLock<Option<String>>,
    cache: RwLock<Option<CachedLedger>>,
}

impl SyncClient {
    pub fn new(remote: Arc<dyn RemoteContentStore>, local: LocalStore, admin: AdminSeed) -> Self {
        Self {
            remote,
            local,
            admin,
            token: RwLock::new(None),
            cache: RwLock::new(None),
        }
    }

    /// Stores the access token, persisting it so it survives restarts.
    pub async fn initialize(&self, token: String) {
        self.local.save(store::TOKEN_KEY, &token);
        *self.token.write().await = Some(token);
    }

    /// Whether a credential is available, re-reading the local store if the
    /// token is not already held in memory.
    pub async fn is_initialized(&self) -> bool {
        self.credential().await.is_some()
    }

    /// Drops the credential and the cache, locally and persistently.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
        *self.cache.write().await = None;
        self.local.remove(store::TOKEN_KEY);
        info!("Remote access token cleared");
    }

    /// Holds a token for this process only, without persisting it. Used for
    /// tokens arriving through the environment.
    pub async fn set_transient_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    async fn credential(&self) -> Option<String> {
        if let Some(token) = self.token.read().await.clone() {
            return Some(token);
        }
        let saved: Option<String> = self.local.load(store::TOKEN_KEY);
        if let Some(token) = saved.clone() {
            debug!("Access token recovered from local store");
            *self.token.write().await = Some(token);
        }
        saved
    }

    fn seeded(&self) -> Ledger {
        Ledger::seeded(self.admin.to_user())
    }

    async fn store_cache(&self, ledger: Ledger) {
        *self.cache.write().await = Some(CachedLedger {
            ledger,
            fetched_at: Instant::now(),
        });
    }

    /// Fetches the ledger.
    ///
    /// Serves from cache when the last fetch is younger than a minute.
    /// An absent remote file is created from the seed and the creation is
    /// persisted immediately, so a subsequent fetch finds it established.
    /// Transient failures degrade to a fresh seeded ledger instead of
    /// erroring.
    pub async fn fetch_ledger(&self) -> FetchOutcome {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < CACHE_DURATION {
                    return FetchOutcome::Existing(cached.ledger.clone());
                }
            }
        }

        let Some(token) = self.credential().await else {
            return FetchOutcome::Unconfigured;
        };

        match self.remote.get_file(&token).await {
            Ok(None) => {
                info!("Remote data file absent; creating it from the seed");
                let ledger = self.seeded();
                if self.save_ledger(ledger.clone()).await {
                    let established = self
                        .cache
                        .read()
                        .await
                        .as_ref()
                        .map_or_else(|| ledger.clone(), |c| c.ledger.clone());
                    FetchOutcome::Created(established)
                } else {
                    FetchOutcome::Degraded(ledger)
                }
            }
            Ok(Some(file)) => match serde_json::from_str::<Ledger>(&file.content) {
                Ok(mut ledger) => {
                    ledger.repair(|| self.admin.to_user());
                    self.store_cache(ledger.clone()).await;
                    FetchOutcome::Existing(ledger)
                }
                Err(e) => {
                    error!("Error decoding remote database: {e}");
                    FetchOutcome::Degraded(self.seeded())
                }
            },
            Err(e) => {
                error!("Error fetching remote database: {e}");
                FetchOutcome::Degraded(self.seeded())
            }
        }
    }

    /// Saves the ledger, stamping its last-updated time first.
    ///
    /// Reads the current revision token and writes with create-or-update
    /// semantics. Returns `false` on any failure (including a stale revision
    /// token, i.e. a concurrent writer won); the cache is refreshed only on
    /// success so a failed save cannot poison subsequent fetches.
    pub async fn save_ledger(&self, mut ledger: Ledger) -> bool {
        let Some(token) = self.credential().await else {
            warn!("Cannot save remotely: no access token configured");
            return false;
        };

        ledger.touch();

        let revision = match self.remote.get_file(&token).await {
            Ok(Some(file)) => Some(file.revision),
            Ok(None) => None,
            Err(e) => {
                debug!("Could not read current revision, attempting create: {e}");
                None
            }
        };

        let body = match serde_json::to_string_pretty(&ledger) {
            Ok(body) => body,
            Err(e) => {
                error!("Error serializing ledger: {e}");
                return false;
            }
        };
        let message = format!("Update database - {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

        match self
            .remote
            .put_file(&token, &body, revision.as_deref(), &message)
            .await
        {
            Ok(()) => {
                self.store_cache(ledger).await;
                true
            }
            Err(e) => {
                error!("Error saving remote database: {e}");
                false
            }
        }
    }
}

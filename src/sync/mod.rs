//! Remote synchronization - keeping the ledger mirrored in a GitHub
//! repository.
//!
//! Layered from the outside in: [`api`] defines the file-store seam,
//! [`github`] implements it against the contents API, [`client`] adds the
//! credential, cache and fail-open fetch/save contract, and [`engine`] turns
//! bursts of local edits into infrequent coalesced writes.

pub mod api;
pub mod client;
pub mod engine;
pub mod github;

pub use api::{RemoteContentStore, RemoteFile};
pub use client::{FetchOutcome, SyncClient};
pub use engine::{SyncEngine, SyncStatus};
pub use github::GitHubContents;

//! The remote file-store seam.
//!
//! One file, read whole and written whole, with an opaque revision token for
//! update-in-place. [`crate::sync::SyncClient`] works against this trait so
//! everything above the transport is testable with an in-memory store.

use crate::errors::Result;
use async_trait::async_trait;

/// A file fetched from the remote store, transport decoding already applied.
#[derive(Debug, Clone)]
pub struct RemoteFile {
    /// Decoded file body
    pub content: String,
    /// Opaque revision token required to update the file in place
    pub revision: String,
}

/// A versioned single-file store.
#[async_trait]
pub trait RemoteContentStore: Send + Sync {
    /// Reads the file. `Ok(None)` means the file has never been created;
    /// transport or auth failures are errors.
    async fn get_file(&self, token: &str) -> Result<Option<RemoteFile>>;

    /// Creates or updates the file. `revision` must be the current token when
    /// the file exists; `None` requests creation. The store rejects a stale
    /// token.
    async fn put_file(
        &self,
        token: &str,
        content: &str,
        revision: Option<&str>,
        message: &str,
    ) -> Result<()>;
}

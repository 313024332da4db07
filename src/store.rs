//! Local persistence - named JSON blobs under the data directory.
//!
//! This is the always-on, synchronous half of persistence. Saving is
//! best-effort: any failure is logged and swallowed so a full disk or a
//! read-only directory can never take the in-memory data down with it.
//! Loading returns a default on missing or unreadable content for the same
//! reason.

use crate::errors::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Blob holding the six entity lists.
pub const DATA_KEY: &str = "khs_data";
/// Copy of the last successful remote fetch.
pub const BACKUP_KEY: &str = "khs_backup";
/// The signed-in session record.
pub const SESSION_KEY: &str = "khs_user";
/// The remote access token.
pub const TOKEN_KEY: &str = "github_token";

/// Local key-value store backed by one JSON file per key.
#[derive(Debug, Clone)]
pub struct LocalStore {
    data_dir: PathBuf,
}

impl LocalStore {
    /// Opens the store, creating the data directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Serializes and writes `value` under `key`. Never fails the caller.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let path = self.path_for(key);
        let serialized = match serde_json::to_string_pretty(value) {
            Ok(s) => s,
            Err(e) => {
                error!("Error serializing {key}: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, serialized) {
            error!("Error saving {key} to {path:?}: {e}");
        }
    }

    /// Reads and deserializes the blob under `key`, or `None` when the file is
    /// missing or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let contents = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                debug!("No local blob for {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("Error parsing local blob {key}: {e}");
                None
            }
        }
    }

    /// Like [`load`](Self::load), falling back to `default`.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.load(key).unwrap_or(default)
    }

    /// Removes the blob under `key`, ignoring a missing file.
    pub fn remove(&self, key: &str) {
        let path = self.path_for(key);
        if let Err(e) = std::fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                error!("Error removing {key}: {e}");
            }
        }
    }

    /// The directory this store writes into.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

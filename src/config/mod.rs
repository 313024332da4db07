//! Configuration management for storage paths, the remote repository and the
//! seeded admin account.
//!
//! Configuration is a TOML file (`khata.toml` by default, overridable through
//! `KHATA_CONFIG`) with environment-variable overrides for the settings that
//! differ between machines. A missing file is not an error; every table has
//! usable defaults.

/// Remote repository coordinates
pub mod remote;

/// Local data directory settings
pub mod storage;

pub use remote::RemoteConfig;
pub use storage::StorageConfig;

use crate::entities::{User, UserRole};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    /// Absent when the tool runs purely against local storage.
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub admin: AdminSeed,
}

/// The admin account seeded into a freshly created ledger.
///
/// Never compiled in: the values come from configuration, with a warning when
/// the default password is left in place.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
    pub name: String,
}

impl Default for AdminSeed {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            name: "Administrator".to_string(),
        }
    }
}

impl AdminSeed {
    /// Builds the seeded user record, stamping a fresh id and timestamp.
    pub fn to_user(&self) -> User {
        User::new(
            self.username.clone(),
            self.password.clone(),
            UserRole::Admin,
            self.name.clone(),
        )
    }
}

/// Loads the application configuration.
///
/// Reads the TOML file if present, then applies environment overrides:
/// `KHATA_DATA_DIR` for the data directory and `KHATA_ADMIN_PASSWORD` for the
/// seeded admin password.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("KHATA_CONFIG").unwrap_or_else(|_| "khata.toml".to_string());
    let mut config = load_config_file(Path::new(&path))?;

    if let Ok(dir) = std::env::var("KHATA_DATA_DIR") {
        config.storage.data_dir = dir.into();
    }
    if let Ok(password) = std::env::var("KHATA_ADMIN_PASSWORD") {
        config.admin.password = password;
    }

    if config.admin.password == AdminSeed::default().password {
        warn!("Seeded admin password is the default; set [admin] password or KHATA_ADMIN_PASSWORD");
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_config() {
        let toml = r#"
            [storage]
            data_dir = "/tmp/khata-test"

            [remote]
            owner = "example-org"
            repo = "khs-data"

            [admin]
            username = "secretary"
            password = "s3cret"
            name = "সম্পাদক"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("/tmp/khata-test"));
        let remote = config.remote.unwrap();
        assert_eq!(remote.owner, "example-org");
        assert_eq!(remote.repo, "khs-data");
        // Defaults fill the unspecified remote fields.
        assert_eq!(remote.branch, "main");
        assert_eq!(remote.path, "database.json");
        assert_eq!(config.admin.username, "secretary");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.remote.is_none());
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("data"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let config = load_config_file(Path::new("/nonexistent/khata.toml")).unwrap();
        assert!(config.remote.is_none());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage").unwrap();
        let err = load_config_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn admin_seed_builds_user_with_fresh_identity() {
        let seed = AdminSeed::default();
        let user = seed.to_user();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, UserRole::Admin);
        assert!(!user.id.is_empty());
    }
}

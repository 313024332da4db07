//! Remote repository configuration.
//!
//! Identifies the GitHub repository and file that hold the shared ledger.
//! The access token is deliberately not part of configuration; it is entered
//! once via `sync login` (or `GITHUB_TOKEN`) and kept in the local store so it
//! survives restarts.

use serde::Deserialize;

/// Coordinates of the remote ledger file.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch holding the data file
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Path of the data file within the repository
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_path() -> String {
    "database.json".to_string()
}

impl RemoteConfig {
    /// Contents-API URL for the data file, without the `ref` query.
    pub fn contents_url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.owner, self.repo, self.path
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;

    #[test]
    fn contents_url_includes_owner_repo_and_path() {
        let config: RemoteConfig = toml::from_str(
            r#"
            owner = "example-org"
            repo = "khs-data"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.contents_url(),
            "https://api.github.com/repos/example-org/khs-data/contents/database.json"
        );
    }
}

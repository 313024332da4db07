//! User entity - A login account stored inside the ledger itself.
//!
//! Passwords are stored as the remote file records them. This tool inherits
//! the flat user list of the dashboard it replaces; it is not an
//! authentication system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Login name, unique within the ledger's user list
    pub username: String,
    pub password: String,
    pub role: UserRole,
    /// Display name
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, password: String, role: UserRole, name: String) -> Self {
        Self {
            id: super::generate_id(),
            username,
            password,
            role,
            name,
            created_at: super::now(),
        }
    }
}

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Viewer,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("unknown role '{s}' (expected admin or viewer)")),
        }
    }
}

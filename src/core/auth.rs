//! Authentication against the ledger's user list.
//!
//! Credential lookup only: usernames and passwords are compared against the
//! stored records, and the result is an explicit outcome rather than a bare
//! option so callers cannot confuse "no such user" with "not attempted".

use crate::entities::{Ledger, User, UserRole};
use crate::errors::{Error, Result};

/// Result of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Credentials matched this user record.
    Granted(User),
    /// Unknown username or wrong password; which one is deliberately not
    /// distinguished.
    InvalidCredentials,
}

/// Checks a username/password pair against the user list.
pub fn authenticate(users: &[User], username: &str, password: &str) -> AuthOutcome {
    match users
        .iter()
        .find(|u| u.username == username && u.password == password)
    {
        Some(user) => AuthOutcome::Granted(user.clone()),
        None => AuthOutcome::InvalidCredentials,
    }
}

/// Creates a user account, refusing a username that already exists.
pub fn create_user(
    ledger: &mut Ledger,
    username: &str,
    password: &str,
    role: UserRole,
    name: &str,
) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(Error::Validation {
            message: "Username cannot be empty".to_string(),
        });
    }
    if ledger.users.iter().any(|u| u.username == username) {
        return Err(Error::DuplicateUsername {
            username: username.to_string(),
        });
    }
    let user = User::new(
        username.to_string(),
        password.to_string(),
        role,
        name.to_string(),
    );
    ledger.users.push(user.clone());
    Ok(user)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_ledger;

    #[test]
    fn authenticate_grants_on_exact_match() {
        let ledger = test_ledger();
        let outcome = authenticate(&ledger.users, "admin", "secret");
        let AuthOutcome::Granted(user) = outcome else {
            panic!("expected Granted");
        };
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn authenticate_refuses_wrong_password_and_unknown_user() {
        let ledger = test_ledger();
        assert_eq!(
            authenticate(&ledger.users, "admin", "wrong"),
            AuthOutcome::InvalidCredentials
        );
        assert_eq!(
            authenticate(&ledger.users, "ghost", "secret"),
            AuthOutcome::InvalidCredentials
        );
    }

    #[test]
    fn create_user_refuses_duplicate_username() {
        let mut ledger = test_ledger();
        create_user(&mut ledger, "viewer1", "pw", UserRole::Viewer, "দর্শক").unwrap();
        let err = create_user(&mut ledger, "viewer1", "other", UserRole::Viewer, "").unwrap_err();
        assert!(matches!(err, Error::DuplicateUsername { .. }));
        assert_eq!(ledger.users.len(), 2);
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User sessions.
//!
//! Credential storage lives outside this crate. Applications plug their own
//! user database in through [`Authenticator`]; a successful [`Session::login`]
//! yields the identity passed as `owner` to the device manager.

use crate::error::{Error, Result};

/// Checks a username and password against a user database.
pub trait Authenticator {
    /// Returns `true` if `password` is valid for `username`.
    fn authenticate(&self, username: &str, password: &str) -> bool;
}

impl<F> Authenticator for F
where
    F: Fn(&str, &str) -> bool,
{
    fn authenticate(&self, username: &str, password: &str) -> bool {
        self(username, password)
    }
}

/// An authenticated user.
///
/// # Examples
///
/// ```
/// use smarthome_lib::Session;
///
/// let users = |user: &str, password: &str| user == "alice" && password == "hunter2";
///
/// let session = Session::login(&users, "alice", "hunter2").unwrap();
/// assert_eq!(session.user(), "alice");
/// assert!(Session::login(&users, "alice", "wrong").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: String,
}

impl Session {
    /// Authenticates `username` and opens a session for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthenticationFailed`] if the authenticator rejects
    /// the credentials.
    pub fn login(
        authenticator: &impl Authenticator,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        if !authenticator.authenticate(username, password) {
            tracing::warn!(user = username, "Login rejected");
            return Err(Error::AuthenticationFailed);
        }

        tracing::info!(user = username, "User logged in");
        Ok(Self {
            user: username.to_string(),
        })
    }

    /// Returns the authenticated username.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Users(HashMap<&'static str, &'static str>);

    impl Authenticator for Users {
        fn authenticate(&self, username: &str, password: &str) -> bool {
            self.0.get(username) == Some(&password)
        }
    }

    fn users() -> Users {
        Users(HashMap::from([("alice", "pw1"), ("bob", "pw2")]))
    }

    #[test]
    fn login_with_valid_credentials() {
        let session = Session::login(&users(), "bob", "pw2").unwrap();
        assert_eq!(session.user(), "bob");
    }

    #[test]
    fn login_rejects_wrong_password() {
        let err = Session::login(&users(), "alice", "pw2").unwrap_err();
        assert!(matches!(err, Error::AuthenticationFailed));
    }

    #[test]
    fn login_rejects_unknown_user() {
        assert!(Session::login(&users(), "carol", "pw1").is_err());
    }
}

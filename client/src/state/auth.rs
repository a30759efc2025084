//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A plain snapshot of the session. The session object in `state::session`
//! owns the authoritative copy and mirrors it into an `RwSignal<AuthState>`
//! that the route guard and user-aware components read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Token, validated user and loading flag.
///
/// `user` is only ever set together with `token`, after the backend has
/// accepted that token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State at application start, before the stored token has been checked.
    pub fn initializing() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }
}

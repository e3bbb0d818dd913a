//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reactive mirror of the `SessionStore`, read by the auth gate and
//! user-aware components. The default value is the uninitialized phase:
//! durable storage has not been consulted yet, so nothing may redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session not yet restored from durable storage.
    Loading,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Restored state: authenticated with `Some(user)`, anonymous with `None`.
    pub fn ready(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn status(&self) -> AuthStatus {
        match (&self.user, self.loading) {
            (_, true) => AuthStatus::Loading,
            (Some(_), false) => AuthStatus::Authenticated,
            (None, false) => AuthStatus::Anonymous,
        }
    }
}

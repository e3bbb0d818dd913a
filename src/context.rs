//! Application-level provider for the session service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionStore` at startup and hands it to
//! `provide_auth_context`. Views reach it through `use_auth()`; the store is
//! released with the root owner when the application unmounts.
//!
//! `AuthContext` keeps `state` in step with the store after every operation,
//! so components can react to logins, logouts, and lazily reaped expiry
//! through an ordinary signal.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::net::identity::SignInGrant;
use crate::session::{SessionStore, Token, User};
use crate::state::auth::{AuthState, AuthStatus};

#[derive(Clone)]
pub struct AuthContext {
    store: Arc<SessionStore>,
    config: Arc<SessionConfig>,
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    /// Wrap `store` in the uninitialized phase; nothing is read from durable
    /// storage until [`AuthContext::restore`].
    pub fn new(store: SessionStore, config: SessionConfig) -> Self {
        Self { store: Arc::new(store), config: Arc::new(config), state: RwSignal::new(AuthState::default()) }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Cold-start read: resolve the session from durable storage and leave the
    /// loading phase.
    pub fn restore(&self) -> AuthStatus {
        let status = if self.check_auth() { AuthStatus::Authenticated } else { AuthStatus::Anonymous };
        log::debug!("session restored: {status:?}");
        status
    }

    pub fn login_user(&self, user: User, token: Token) {
        self.store.login_user(user.clone(), token);
        self.publish(AuthState::ready(Some(user)));
    }

    /// Log in with a provider grant, stamping a default expiry from the
    /// store's clock when the provider sent none.
    pub fn login_grant(&self, grant: SignInGrant) {
        let (user, token) = grant.into_parts(self.store.now_secs());
        self.login_user(user, token);
    }

    pub fn logout(&self) {
        self.store.logout();
        self.publish(AuthState::ready(None));
    }

    /// Effectful check: reaps an absent or expired session and publishes the
    /// outcome.
    pub fn check_auth(&self) -> bool {
        self.get_user().is_some()
    }

    pub fn get_user(&self) -> Option<User> {
        let user = self.store.get_user();
        self.publish(AuthState::ready(user.clone()));
        user
    }

    /// Pure check against the store; safe to call from render closures.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// Only notify subscribers when the state actually changes, so effects
    /// that call `check_auth` do not retrigger themselves.
    fn publish(&self, next: AuthState) {
        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
    }
}

/// Construct the session service context for the current owner.
///
/// The cold-start restore runs in an effect, so server renders stay in the
/// loading phase and the browser resolves the session after hydration.
pub fn provide_auth_context(store: SessionStore, config: SessionConfig) -> AuthContext {
    let ctx = AuthContext::new(store, config);
    provide_context(ctx.clone());

    let restore = ctx.clone();
    Effect::new(move || {
        restore.restore();
    });

    on_cleanup(|| log::debug!("auth context released"));
    ctx
}

/// The session service provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

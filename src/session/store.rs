//! Session store: the single source of truth for the signed-in principal.
//!
//! ARCHITECTURE
//! ============
//! Memory is authoritative. Durable storage is a write-through copy that is
//! only read when memory holds no session (cold start after a reload, or a
//! login performed by another tab).
//!
//! Expiry is lazy: nothing runs on a timer. `is_authenticated` is the pure
//! check, `reap_if_expired` the mutator, and `check_auth` composes the two so
//! an expired session is cleared by whichever caller asks about it first.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::model::{Session, Token, User, is_valid};
use crate::clock::Clock;
use crate::config::StorageKeys;
use crate::storage::{DurableStorage, load_json, save_json};

pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
    clock: Arc<dyn Clock>,
    keys: StorageKeys,
    memory: Mutex<Option<Session>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("keys", &self.keys)
            .field("resident", &self.memory().is_some())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn DurableStorage>, clock: Arc<dyn Clock>, keys: StorageKeys) -> Self {
        Self { storage, clock, keys, memory: Mutex::new(None) }
    }

    pub fn now_secs(&self) -> i64 {
        self.clock.now_secs()
    }

    /// Record a fresh login in memory and write both halves through to
    /// durable storage.
    ///
    /// Persistence failures are logged; the in-memory session still stands
    /// and simply will not survive a reload.
    pub fn login_user(&self, user: User, token: Token) {
        if let Err(e) = save_json(self.storage.as_ref(), &self.keys.session, &token) {
            log::warn!("session token not persisted: {e}");
        }
        if let Err(e) = save_json(self.storage.as_ref(), &self.keys.user, &user) {
            log::warn!("session user not persisted: {e}");
        }
        log::info!("session started for user {}", user.id);
        *self.memory() = Some(Session::new(user, token));
    }

    /// The current user, only while the session is valid.
    pub fn get_user(&self) -> Option<User> {
        if !self.check_auth() {
            return None;
        }
        self.memory().as_ref().map(|session| session.user.clone())
    }

    /// Whether a valid session exists, clearing any absent or expired session
    /// as a side effect.
    pub fn check_auth(&self) -> bool {
        !self.reap_if_expired()
    }

    /// Pure counterpart of [`SessionStore::check_auth`]: same resolution,
    /// no mutation.
    pub fn is_authenticated(&self) -> bool {
        let now = self.now_secs();
        if let Some(session) = self.memory().as_ref() {
            return is_valid(session, now);
        }
        self.load_persisted().is_some_and(|session| is_valid(&session, now))
    }

    /// Clear the session unless it is present and valid.
    ///
    /// Returns `true` when the session was not valid and has been cleared.
    /// A valid session found only in durable storage is adopted into memory.
    pub fn reap_if_expired(&self) -> bool {
        let now = self.now_secs();
        {
            let mut memory = self.memory();
            match memory.as_ref().map(|session| is_valid(session, now)) {
                Some(true) => return false,
                Some(false) => {}
                None => {
                    if let Some(session) = self.load_persisted().filter(|s| is_valid(s, now)) {
                        log::debug!("session restored from storage for user {}", session.user.id);
                        *memory = Some(session);
                        return false;
                    }
                }
            }
        }
        self.logout();
        true
    }

    /// Drop the session from memory and both storage slots.
    pub fn logout(&self) {
        if self.memory().take().is_some() {
            log::info!("session ended");
        }
        for key in [&self.keys.session, &self.keys.user] {
            if let Err(e) = self.storage.remove_item(key) {
                log::debug!("session slot {key} not cleared: {e}");
            }
        }
    }

    /// Both slots must decode; either half alone is not a session.
    fn load_persisted(&self) -> Option<Session> {
        let token: Token = load_json(self.storage.as_ref(), &self.keys.session)?;
        let user: User = load_json(self.storage.as_ref(), &self.keys.user)?;
        Some(Session::new(user, token))
    }

    fn memory(&self) -> MutexGuard<'_, Option<Session>> {
        self.memory.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

use std::sync::Arc;

use super::*;
use crate::clock::ManualClock;
use crate::storage::{DurableStorage, MemoryStorage};

const NOW: i64 = 1_700_000_000;

fn context_over(storage: Arc<MemoryStorage>, clock: Arc<ManualClock>) -> AuthContext {
    let config = SessionConfig::default();
    let store = SessionStore::new(storage, clock, config.keys.clone());
    AuthContext::new(store, config)
}

#[test]
fn new_context_starts_loading() {
    let ctx = context_over(Arc::default(), Arc::new(ManualClock::new(NOW)));
    assert_eq!(ctx.state.get_untracked().status(), AuthStatus::Loading);
}

#[test]
fn restore_on_empty_storage_is_anonymous() {
    let ctx = context_over(Arc::default(), Arc::new(ManualClock::new(NOW)));
    assert_eq!(ctx.restore(), AuthStatus::Anonymous);
    assert_eq!(ctx.state.get_untracked(), AuthState::ready(None));
}

#[test]
fn restore_picks_up_persisted_session() {
    let storage = Arc::new(MemoryStorage::default());
    storage
        .set_item("auth-session", &format!(r#"{{"accessToken":"abc","expiresAt":{}}}"#, NOW + 60))
        .unwrap();
    storage.set_item("auth-user", r#"{"id":"1"}"#).unwrap();

    let ctx = context_over(storage, Arc::new(ManualClock::new(NOW)));
    assert_eq!(ctx.restore(), AuthStatus::Authenticated);
    assert_eq!(ctx.state.get_untracked().user, Some(User::new("1")));
}

#[test]
fn login_and_logout_publish_state() {
    let storage = Arc::new(MemoryStorage::default());
    let ctx = context_over(storage.clone(), Arc::new(ManualClock::new(NOW)));

    ctx.login_user(User::new("1"), Token::new("abc", NOW + 3600));
    assert_eq!(ctx.state.get_untracked().status(), AuthStatus::Authenticated);
    assert!(ctx.is_authenticated());

    ctx.logout();
    assert_eq!(ctx.state.get_untracked(), AuthState::ready(None));
    assert!(storage.is_empty());
}

#[test]
fn check_auth_publishes_lazy_expiry() {
    let clock = Arc::new(ManualClock::new(NOW));
    let ctx = context_over(Arc::default(), clock.clone());
    ctx.login_user(User::new("1"), Token::new("abc", NOW + 10));

    clock.advance(11);
    assert!(!ctx.is_authenticated());
    // Pure check leaves the published state alone.
    assert_eq!(ctx.state.get_untracked().status(), AuthStatus::Authenticated);

    assert!(!ctx.check_auth());
    assert_eq!(ctx.state.get_untracked().status(), AuthStatus::Anonymous);
}

#[test]
fn login_grant_uses_store_clock_for_default_expiry() {
    let clock = Arc::new(ManualClock::new(NOW));
    let ctx = context_over(Arc::default(), clock.clone());
    ctx.login_grant(SignInGrant { access_token: "jwt".to_owned(), expires_at: None, user: User::new("7") });

    clock.advance(3600);
    assert!(ctx.check_auth());
    clock.advance(1);
    assert!(!ctx.check_auth());
}

use std::cell::RefCell;
use std::sync::Arc;

use super::*;
use crate::clock::ManualClock;
use crate::config::SessionConfig;
use crate::session::{SessionStore, Token, User};
use crate::storage::MemoryStorage;

const NOW: i64 = 1_700_000_000;

fn fresh_context(clock: Arc<ManualClock>) -> AuthContext {
    let config = SessionConfig::default();
    let store = SessionStore::new(Arc::new(MemoryStorage::default()), clock, config.keys.clone());
    AuthContext::new(store, config)
}

/// Navigation callback that records `(path, replace)` for every call.
fn recorder(calls: &RefCell<Vec<(String, bool)>>) -> impl Fn(&str, NavigateOptions) + '_ {
    move |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace))
}

#[test]
fn pending_while_loading() {
    assert_eq!(gate_decision(&AuthState::default(), false), GateDecision::Pending);
    assert_eq!(gate_decision(&AuthState::default(), true), GateDecision::Pending);
}

#[test]
fn redirect_when_anonymous() {
    assert_eq!(gate_decision(&AuthState::ready(None), false), GateDecision::Redirect);
}

#[test]
fn render_when_authenticated_and_valid() {
    let state = AuthState::ready(Some(User::new("u1")));
    assert_eq!(gate_decision(&state, true), GateDecision::Render);
}

#[test]
fn redirect_when_published_user_has_expired() {
    // State still shows the user, but the token has lapsed since it was published.
    let state = AuthState::ready(Some(User::new("u1")));
    assert_eq!(gate_decision(&state, false), GateDecision::Redirect);
}

#[test]
fn anonymous_state_wins_over_valid_storage() {
    // A session written by another tab only counts once a check adopts it.
    assert_eq!(gate_decision(&AuthState::ready(None), true), GateDecision::Redirect);
}

// =============================================================
// should_navigate
// =============================================================

#[test]
fn no_navigation_while_loading() {
    assert!(!should_navigate(true, false, false));
    assert!(!should_navigate(true, true, false));
}

#[test]
fn anonymous_navigates_once() {
    assert!(should_navigate(false, false, false));
}

#[test]
fn rerun_after_redirect_does_not_navigate_again() {
    assert!(!should_navigate(false, false, true));
}

#[test]
fn authenticated_never_navigates() {
    assert!(!should_navigate(false, true, false));
    assert!(!should_navigate(false, true, true));
}

// =============================================================
// Redirect effect runs
// =============================================================

#[test]
fn fresh_client_redirects_to_login_exactly_once() {
    let ctx = fresh_context(Arc::new(ManualClock::new(NOW)));
    let calls = RefCell::new(Vec::new());
    let navigate = recorder(&calls);

    // Before restore the state is still loading.
    let redirected = redirect_pass(&ctx, None, &navigate);
    assert!(!redirected);
    assert!(calls.borrow().is_empty());

    assert_eq!(ctx.restore(), AuthStatus::Anonymous);
    let redirected = redirect_pass(&ctx, Some(redirected), &navigate);
    assert!(redirected);
    assert_eq!(*calls.borrow(), vec![("/auth/login".to_owned(), true)]);

    // State republished by the check reruns the effect.
    let redirected = redirect_pass(&ctx, Some(redirected), &navigate);
    assert!(redirected);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn valid_session_does_not_redirect() {
    let ctx = fresh_context(Arc::new(ManualClock::new(NOW)));
    ctx.login_user(User::new("u1"), Token::new("abc", NOW + 60));
    let calls = RefCell::new(Vec::new());

    assert!(!redirect_pass(&ctx, None, &recorder(&calls)));
    assert!(calls.borrow().is_empty());
}

#[test]
fn expiry_while_mounted_redirects_once() {
    let clock = Arc::new(ManualClock::new(NOW));
    let ctx = fresh_context(clock.clone());
    ctx.login_user(User::new("u1"), Token::new("abc", NOW + 60));
    let calls = RefCell::new(Vec::new());
    let navigate = recorder(&calls);

    let redirected = redirect_pass(&ctx, None, &navigate);
    clock.advance(61);
    let redirected = redirect_pass(&ctx, Some(redirected), &navigate);
    assert!(redirected);
    assert_eq!(ctx.state.get_untracked(), AuthState::ready(None));

    redirect_pass(&ctx, Some(redirected), &navigate);
    assert_eq!(calls.borrow().len(), 1);
}

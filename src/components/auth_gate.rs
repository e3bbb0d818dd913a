//! Guard for views that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route is wrapped in `AuthGate`, so all of them share one
//! unauthenticated destination (`SessionConfig::login_path`) and one
//! redirect policy.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::context::{AuthContext, use_auth};
use crate::state::auth::{AuthState, AuthStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not restored yet; render a placeholder, do not navigate.
    Pending,
    Render,
    Redirect,
}

/// Decide what the gate does for `state`, given the store's pure validity
/// check at this instant.
pub fn gate_decision(state: &AuthState, session_valid: bool) -> GateDecision {
    match state.status() {
        AuthStatus::Loading => GateDecision::Pending,
        AuthStatus::Authenticated if session_valid => GateDecision::Render,
        AuthStatus::Authenticated | AuthStatus::Anonymous => GateDecision::Redirect,
    }
}

/// Whether the redirect effect should navigate on this run.
///
/// Reaping an expired session publishes a new state and reruns the effect;
/// `already_redirected` keeps that rerun from navigating a second time.
pub fn should_navigate(loading: bool, authenticated: bool, already_redirected: bool) -> bool {
    !loading && !authenticated && !already_redirected
}

/// One run of the redirect effect. Returns whether the gate has redirected for
/// the current unauthenticated episode, which feeds the next run.
fn redirect_pass<F>(auth: &AuthContext, redirected: Option<bool>, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let loading = auth.state.get().loading;
    let authenticated = !loading && auth.check_auth();
    if should_navigate(loading, authenticated, redirected.unwrap_or(false)) {
        let login_path = auth.config().login_path.as_str();
        log::debug!("unauthenticated access, redirecting to {login_path}");
        navigate(login_path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    !loading && !authenticated
}

/// Re-check the session whenever auth state changes and navigate to the login
/// view once it is known to be absent or expired.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |redirected: Option<bool>| redirect_pass(&auth, redirected, &navigate));
}

/// Render `children` only for a valid session; redirect otherwise.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth.clone(), use_navigate());

    let authorized = move || {
        auth.state.with(|state| gate_decision(state, auth.is_authenticated())) == GateDecision::Render
    };

    view! {
        <Show when=authorized fallback=|| view! { <div class="auth-gate"></div> }>
            {children()}
        </Show>
    }
}

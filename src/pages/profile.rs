//! Profile page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `AuthGate`, so a user is always present while this renders;
//! the fallbacks only cover the frame in which a logout is being published.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::context::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let state = use_auth().state;
    let user = move || state.get().user;

    let display_name = move || {
        user()
            .map(|u| u.display_name().to_owned())
            .unwrap_or_else(|| "Guest".to_owned())
    };
    let email = move || user().and_then(|u| u.email).unwrap_or_default();
    let confirmed = move || user().is_some_and(|u| u.email_confirmed());

    view! {
        <div class="profile-page">
            <h1 class="profile-page__name">{display_name}</h1>
            <p class="profile-page__email">{email}</p>
            <Show when=confirmed fallback=|| view! { <p class="profile-page__unconfirmed">"Email not confirmed"</p> }>
                <p class="profile-page__confirmed">"Email confirmed"</p>
            </Show>
            <LogoutButton/>
        </div>
    }
}

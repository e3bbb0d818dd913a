//! Registration page: display name + email + password.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::context::use_auth;

const REQUIRED: &str = "Fill in every field.";
const INVALID_EMAIL: &str = "Please enter a valid email address.";
const NAME_LENGTH: &str = "Name must be between 2 and 50 characters.";
const WEAK_PASSWORD: &str =
    "Password needs at least 8 characters with upper and lower case letters, a number, and a symbol.";
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const CONFIRM_EMAIL: &str = "Check your inbox to confirm your email, then sign in.";

const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct Registration {
    display_name: String,
    email: String,
    password: String,
}

fn plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

fn strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Client-side checks before hitting the provider; returns the first failure.
fn validate_registration(display_name: &str, email: &str, password: &str) -> Result<Registration, &'static str> {
    let display_name = display_name.trim();
    let email = email.trim();
    if display_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(REQUIRED);
    }
    if !(2..=50).contains(&display_name.chars().count()) {
        return Err(NAME_LENGTH);
    }
    if !plausible_email(email) {
        return Err(INVALID_EMAIL);
    }
    if !strong_password(password) {
        return Err(WEAK_PASSWORD);
    }
    Ok(Registration { display_name: display_name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let login_path = auth.config().login_path.clone();
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_registration(&display_name.get(), &email.get(), &password.get()) {
            Ok(form) => form,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::net::identity::{SignUpOutcome, sign_up};

            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                let identity = auth.config().identity.clone();
                match sign_up(&identity, &form.email, &form.password, &form.display_name).await {
                    Ok(SignUpOutcome::SignedIn(grant)) => {
                        auth.login_grant(grant);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&auth.config().home_path);
                        }
                    }
                    Ok(SignUpOutcome::ConfirmationRequired(user)) => {
                        log::info!("sign-up pending email confirmation for {}", user.id);
                        notice.set(CONFIRM_EMAIL.to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        log::warn!("sign-up failed: {e}");
                        error.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, form);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit novalidate=true>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display name"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="john@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="login-message">{move || notice.get()}</p>
                </Show>
                <p class="login-switch">
                    "Already have an account? "
                    <a href=login_path>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

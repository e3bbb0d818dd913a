//! Logout control with an inline confirmation step.

use leptos::prelude::*;

use crate::context::use_auth;

/// Ends the session after confirmation, then hard-navigates home with
/// `location.replace` so no gated page survives in history or memory.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = use_auth();
    let confirming = RwSignal::new(false);

    let on_confirm = move |_| {
        auth.logout();
        confirming.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().replace(&auth.config().home_path);
            }
        }
    };

    view! {
        <div class="logout">
            <Show
                when=move || confirming.get()
                fallback=move || {
                    view! {
                        <button class="btn logout__trigger" on:click=move |_| confirming.set(true)>
                            "Logout"
                        </button>
                    }
                }
            >
                <p class="logout__prompt">
                    "Are you sure you want to log out? You'll need to sign in again to access your account."
                </p>
                <button class="btn" on:click=move |_| confirming.set(false)>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=on_confirm.clone()>
                    "Confirm Logout"
                </button>
            </Show>
        </div>
    }
}

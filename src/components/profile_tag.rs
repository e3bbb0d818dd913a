//! Header account control: initials avatar with a small menu when signed in,
//! a sign-in link otherwise.

#[cfg(test)]
#[path = "profile_tag_test.rs"]
mod profile_tag_test;

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::context::use_auth;
use crate::session::User;
use crate::state::auth::AuthState;

/// The user to show in the tag, if the published state is signed in and the
/// session is still valid.
fn tagged_user(state: &AuthState, session_valid: bool) -> Option<User> {
    if state.loading || !session_valid {
        return None;
    }
    state.user.clone()
}

#[component]
pub fn ProfileTag() -> impl IntoView {
    let auth = use_auth();
    let login_path = auth.config().login_path.clone();
    let state = auth.state;
    let menu_open = RwSignal::new(false);

    let user = Memo::new(move |_| state.with(|s| tagged_user(s, auth.is_authenticated())));
    let name = move || user.get().map(|u| u.display_name().to_owned()).unwrap_or_default();
    let initials = move || user.get().map(|u| u.initials()).unwrap_or_default();

    view! {
        <div class="profile-tag">
            <Show
                when=move || user.with(Option::is_some)
                fallback=move || {
                    view! {
                        <a class="btn profile-tag__sign-in" href=login_path.clone()>
                            "Sign In"
                        </a>
                    }
                }
            >
                <button
                    class="profile-tag__avatar"
                    title=name
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {initials}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="profile-tag__menu">
                        <p class="profile-tag__name">{name}</p>
                        <a class="profile-tag__link" href="/profile">
                            "Profile"
                        </a>
                        <LogoutButton/>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

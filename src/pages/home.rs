//! Public landing page.

use leptos::prelude::*;

use crate::components::profile_tag::ProfileTag;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Marquee"</h1>
                <ProfileTag/>
            </header>
        </div>
    }
}

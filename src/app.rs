//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::clock::SystemClock;
use crate::components::auth_gate::AuthGate;
use crate::config::SessionConfig;
use crate::context::provide_auth_context;
use crate::pages::{home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::session::SessionStore;
use crate::storage::default_storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session service once for the lifetime of the app and provides
/// it to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SessionConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("invalid session config, using defaults: {e}");
        SessionConfig::default()
    });
    let store = SessionStore::new(default_storage(), Arc::new(SystemClock), config.keys.clone());
    provide_auth_context(store, config);

    view! {
        <Stylesheet id="leptos" href="/pkg/marquee.css"/>
        <Title text="Marquee"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <AuthGate>
                                <ProfilePage/>
                            </AuthGate>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

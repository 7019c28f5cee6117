//! Root application component with routing and context providers.
//!
//! [`shell`] and the `ssr` cargo feature are the integration points for an
//! external SSR host (e.g. a `leptos_axum` server serving this crate); the
//! server itself lives outside this repo.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::{messages::MessagesState, session::SessionState};

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
/// Provides the session and message contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session token is context, not a global: every component that needs
    // auth reads the same injected signal.
    let session = RwSignal::new(SessionState::from_storage());
    let messages = RwSignal::new(MessagesState::default());

    provide_context(session);
    provide_context(messages);

    view! {
        <Stylesheet id="leptos" href="/pkg/curio.css"/>
        <Title text="Curio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

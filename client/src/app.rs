//! Root application component with routing.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::API_BASE_META_NAME;
use crate::pages::{classic::ClassicPage, meta_game::MetaGamePage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is written into a meta tag so the browser talks to the backend
/// the host was configured with.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <ApiBaseMeta api_base/>
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

/// Meta tag the browser reads its backend base URL from.
#[component]
pub fn ApiBaseMeta(#[prop(into)] api_base: String) -> impl IntoView {
    view! { <meta name=API_BASE_META_NAME content=api_base/> }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/tictactoe-meta.css"/>
        <Title text="Meta Tic-Tac-Toe"/>

        <Router>
            <nav class="app-nav">
                <a href="/">"Meta"</a>
                <a href="/classic">"Classic"</a>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=MetaGamePage/>
                    <Route path=StaticSegment("classic") view=ClassicPage/>
                </Routes>
            </main>
        </Router>
    }
}

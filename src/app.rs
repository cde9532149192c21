//! Root application component with routing and the navigation chrome.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::navigation::Navigation;
use crate::config::BRAND_NAME;
use crate::pages::{chats::ChatsPage, home::HomePage, rewards::RewardsPage, voice::VoicePage};

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/friendconnect.css"/>
        <Title text=BRAND_NAME/>

        <Router>
            <RoutedNavigation/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("chats") view=ChatsPage/>
                    <Route path=StaticSegment("voice") view=VoicePage/>
                    <Route path=StaticSegment("rewards") view=RewardsPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Navigation bar fed from the router's current path.
#[component]
fn RoutedNavigation() -> impl IntoView {
    let location = use_location();
    view! { <Navigation current_path=location.pathname/> }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::explorer::ExplorerPage;
use crate::state::explorer::ExplorerState;
use crate::state::selection::DateSelection;

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
/// Provides the explorer state and date-selection contexts and sets up
/// the single client-side route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let explorer = RwSignal::new(ExplorerState::default());
    let selection = RwSignal::new(DateSelection::default());

    provide_context(explorer);
    provide_context(selection);

    view! {
        <Stylesheet id="leptos" href="/pkg/facts-explorer.css"/>
        <Title text="Historical Facts Explorer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ExplorerPage/>
            </Routes>
        </Router>
    }
}

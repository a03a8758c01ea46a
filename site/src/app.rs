//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PROFILE;
use crate::pages::home::HomePage;
use crate::state::theme::ThemeState;
use crate::state::ui::UiState;
use crate::util::theme_storage;

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
/// Provides the theme and UI state contexts, restores the stored theme once
/// hydrated, and keeps the page colors in sync with every change.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server and first client render agree on the default theme; the stored
    // preference is swapped in after hydration.
    let theme = RwSignal::new(ThemeState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    Effect::new(move || theme.set(theme_storage::read_preference()));

    Effect::new(move |prev: Option<ThemeState>| {
        let state = theme.get();
        match prev {
            Some(prev) if prev != state => theme_storage::commit(state),
            _ => theme_storage::apply(state),
        }
        state
    });

    let title = format!("{} | {}", PROFILE.name, PROFILE.role);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=title/>
        <Meta name="description" content=PROFILE.tagline/>

        <div
            class="app"
            data-theme=move || theme.get().mode().as_str()
            data-palette=move || theme.get().palette().as_str()
            style=move || theme.get().resolve().inline_style()
        >
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </div>
    }
}

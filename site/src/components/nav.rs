//! Fixed top navigation with section links and theme controls.

use leptos::prelude::*;

use crate::components::theme_picker::{ModeToggle, ThemePicker};
use crate::content::PROFILE;
use crate::state::ui::{Section, UiState};

/// Top navigation bar.
///
/// Compacts once the page scrolls, and collapses into a toggled menu on
/// narrow screens.
#[component]
pub fn Nav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::nav_scrolled;

        let _ = window_event_listener(leptos::ev::scroll, move |_| {
            let scrolled = nav_scrolled(window().scroll_y().unwrap_or(0.0));
            if ui.get_untracked().scrolled != scrolled {
                ui.update(|u| u.scrolled = scrolled);
            }
        });
    }

    let nav_class = move || if ui.get().scrolled { "nav nav--scrolled" } else { "nav" };
    let links_class = move || if ui.get().menu_open { "nav__links nav__links--open" } else { "nav__links" };

    view! {
        <nav class=nav_class>
            <a class="nav__brand" href="#top">{PROFILE.name}</a>
            <ul class=links_class>
                {Section::NAV
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <a
                                    class="nav__link"
                                    class:nav__link--active=move || ui.get().active_section == section
                                    href=section.href()
                                    on:click=move |_| ui.update(|u| u.navigate(section))
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="nav__controls">
                <ThemePicker/>
                <ModeToggle/>
                <button
                    class="nav__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    {move || if ui.get().menu_open { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
        </nav>
    }
}

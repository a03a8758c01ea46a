//! Palette dropdown and light/dark toggle.

use leptos::prelude::*;

use crate::state::theme::{Mode, PaletteId, ThemeState};
use crate::state::ui::UiState;
use crate::util::palette;

/// Dropdown listing every palette with a swatch in the current mode.
#[component]
pub fn ThemePicker() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let current_name = move || palette::palette(theme.get().palette()).name;
    let on_toggle = move |_| ui.update(UiState::toggle_picker);

    view! {
        <div class="theme-picker">
            <button
                class="theme-picker__trigger"
                aria-haspopup="listbox"
                aria-expanded=move || ui.get().picker_open.to_string()
                on:click=on_toggle
            >
                <span class="theme-picker__swatch" style:background=move || theme.get().resolve().primary></span>
                {current_name}
            </button>
            <Show when=move || ui.get().picker_open>
                <ul class="theme-picker__menu" role="listbox">
                    {PaletteId::ALL
                        .into_iter()
                        .map(|id| {
                            let entry = palette::palette(id);
                            let selected = move || theme.get().palette() == id;
                            let swatch = move || entry.appearance(theme.get().mode()).primary;
                            let on_pick = move |_| {
                                theme.update(|t| t.set_palette(id));
                                ui.update(UiState::palette_chosen);
                            };
                            view! {
                                <li
                                    class="theme-picker__option"
                                    class:theme-picker__option--selected=selected
                                    role="option"
                                    aria-selected=move || selected().to_string()
                                    on:click=on_pick
                                >
                                    <span class="theme-picker__swatch" style:background=swatch></span>
                                    {entry.name}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </div>
    }
}

/// Button flipping between dark and light mode.
#[component]
pub fn ModeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let label = move || match theme.get().mode() {
        Mode::Dark => "Switch to light mode",
        Mode::Light => "Switch to dark mode",
    };
    let icon = move || match theme.get().mode() {
        Mode::Dark => "\u{2600}",
        Mode::Light => "\u{263E}",
    };

    view! {
        <button class="mode-toggle" aria-label=label title=label on:click=move |_| theme.update(ThemeState::toggle_mode)>
            {icon}
        </button>
    }
}

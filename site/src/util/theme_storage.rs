//! Theme preference persistence and page-level application.
//!
//! Reads the user's palette/mode from `localStorage` and applies the resolved
//! colors to the `<html>` element so the page background follows the theme.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::ThemeState;
#[cfg(feature = "hydrate")]
use crate::state::theme::{Mode, PaletteId};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "folio_theme";

/// Read the stored theme preference.
///
/// Falls back to the default palette, picking light mode only when the
/// system prefers it and nothing is stored.
pub fn read_preference() -> ThemeState {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeState::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                match serde_json::from_str::<ThemeState>(&raw) {
                    Ok(state) => return state,
                    Err(e) => log::warn!("ignoring stored theme {raw:?}: {e}"),
                }
            }
        }

        let prefers_light = window
            .match_media("(prefers-color-scheme: light)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        let mode = if prefers_light { Mode::Light } else { Mode::Dark };
        ThemeState::new(PaletteId::default(), mode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeState::default()
    }
}

/// Persist the theme preference to localStorage.
pub fn save(state: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(&state) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Set `data-theme`/`data-palette` and the color custom properties on `<html>`.
pub fn apply(state: ThemeState) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let _ = el.set_attribute("data-theme", state.mode().as_str());
        let _ = el.set_attribute("data-palette", state.palette().as_str());

        let Ok(html) = el.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        let style = html.style();
        let colors = state.resolve();
        for (name, value) in colors.css_vars() {
            let _ = style.set_property(name, value);
        }
        let _ = style.set_property("--primary-rgb", &colors.primary_rgb());
        log::debug!("theme applied: {} / {}", state.palette(), state.mode());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Apply and persist in one step; used by every theme control.
pub fn commit(state: ThemeState) {
    apply(state);
    save(state);
}

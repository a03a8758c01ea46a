//! Pure helpers behind the cosmetic scroll and pointer effects.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Scroll distance (px) after which the nav bar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of the viewport height an element must rise above to reveal.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.85;

/// How strongly magnetic buttons follow the pointer.
pub const MAGNETIC_STRENGTH: f64 = 0.3;

/// Whether the nav bar should render in its scrolled state.
#[must_use]
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

/// Translation applied to a magnetic element for a pointer position.
#[must_use]
pub fn magnetic_offset(pointer: (f64, f64), center: (f64, f64), strength: f64) -> (f64, f64) {
    ((pointer.0 - center.0) * strength, (pointer.1 - center.1) * strength)
}

/// CSS `transform` value for an offset.
#[must_use]
pub fn translate_css(offset: (f64, f64)) -> String {
    format!("translate({:.1}px, {:.1}px)", offset.0, offset.1)
}

/// Whether an element whose top edge sits at `element_top` has scrolled into view.
#[must_use]
pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * REVEAL_VIEWPORT_RATIO
}

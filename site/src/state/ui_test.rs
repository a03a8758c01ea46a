use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_everything_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(!state.picker_open);
    assert!(!state.scrolled);
    assert_eq!(state.active_section, Section::About);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggle_menu_opens_and_closes() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn opening_menu_closes_picker() {
    let mut state = UiState { picker_open: true, ..UiState::default() };
    state.toggle_menu();
    assert!(state.menu_open);
    assert!(!state.picker_open);
}

#[test]
fn navigate_sets_section_and_collapses_menu() {
    let mut state = UiState { menu_open: true, ..UiState::default() };
    state.navigate(Section::Projects);
    assert_eq!(state.active_section, Section::Projects);
    assert!(!state.menu_open);
}

#[test]
fn choosing_palette_closes_picker() {
    let mut state = UiState::default();
    state.toggle_picker();
    assert!(state.picker_open);
    state.palette_chosen();
    assert!(!state.picker_open);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_anchors_are_unique() {
    let mut anchors = Section::NAV.iter().map(|s| s.anchor()).collect::<Vec<_>>();
    anchors.sort_unstable();
    anchors.dedup();
    assert_eq!(anchors.len(), Section::NAV.len());
}

#[test]
fn section_href_prefixes_hash() {
    assert_eq!(Section::Writing.href(), "#writing");
    assert_eq!(Section::Contact.label(), "Contact");
}

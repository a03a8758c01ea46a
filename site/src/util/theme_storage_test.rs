#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{Mode, PaletteId};

#[test]
fn read_preference_is_default_in_non_hydrate_tests() {
    assert_eq!(read_preference(), ThemeState::default());
}

#[test]
fn save_apply_and_commit_are_noops_but_callable() {
    let state = ThemeState::new(PaletteId::Forest, Mode::Light);
    save(state);
    apply(state);
    commit(state);
    assert_eq!(read_preference(), ThemeState::default());
}

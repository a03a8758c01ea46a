use super::*;

// =============================================================
// ThemeState defaults and setters
// =============================================================

#[test]
fn theme_state_default_is_ocean_dark() {
    let state = ThemeState::default();
    assert_eq!(state.palette(), PaletteId::Ocean);
    assert_eq!(state.mode(), Mode::Dark);
}

#[test]
fn set_palette_changes_only_palette() {
    let mut state = ThemeState::default();
    state.set_palette(PaletteId::Sunset);
    assert_eq!(state.palette(), PaletteId::Sunset);
    assert_eq!(state.mode(), Mode::Dark);
}

#[test]
fn set_mode_changes_only_mode() {
    let mut state = ThemeState::new(PaletteId::Violet, Mode::Dark);
    state.set_mode(Mode::Light);
    assert_eq!(state.mode(), Mode::Light);
    assert_eq!(state.palette(), PaletteId::Violet);
}

#[test]
fn toggle_mode_flips_between_dark_and_light() {
    let mut state = ThemeState::default();
    state.toggle_mode();
    assert_eq!(state.mode(), Mode::Light);
    state.toggle_mode();
    assert_eq!(state.mode(), Mode::Dark);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_follows_palette_and_mode() {
    let state = ThemeState::new(PaletteId::Forest, Mode::Light);
    assert_eq!(state.resolve(), &palette::palette(PaletteId::Forest).light);

    let state = ThemeState::new(PaletteId::Mono, Mode::Dark);
    assert_eq!(state.resolve(), &palette::palette(PaletteId::Mono).dark);
}

#[test]
fn mode_round_trip_restores_resolved_colors() {
    for id in PaletteId::ALL {
        let mut state = ThemeState::new(id, Mode::Dark);
        let original = *state.resolve();
        state.set_mode(Mode::Light);
        assert_ne!(*state.resolve(), original);
        state.set_mode(Mode::Dark);
        assert_eq!(*state.resolve(), original);
    }
}

#[test]
fn changing_palette_changes_resolved_colors() {
    let ocean = *ThemeState::new(PaletteId::Ocean, Mode::Dark).resolve();
    let sunset = *ThemeState::new(PaletteId::Sunset, Mode::Dark).resolve();
    assert_ne!(ocean, sunset);
}

// =============================================================
// Slugs
// =============================================================

#[test]
fn palette_slugs_round_trip() {
    for id in PaletteId::ALL {
        assert_eq!(id.as_str().parse::<PaletteId>(), Ok(id));
        assert_eq!(id.to_string(), id.as_str());
    }
}

#[test]
fn palette_parse_rejects_unknown_slug() {
    assert_eq!("neon".parse::<PaletteId>(), Err(ThemeError::UnknownPalette("neon".into())));
    assert!("Ocean".parse::<PaletteId>().is_err());
}

#[test]
fn mode_parse_accepts_known_slugs_only() {
    assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
    assert_eq!(" light ".parse::<Mode>(), Ok(Mode::Light));
    assert_eq!("dim".parse::<Mode>(), Err(ThemeError::UnknownMode("dim".into())));
}

#[test]
fn mode_toggled_is_involution() {
    assert_eq!(Mode::Dark.toggled(), Mode::Light);
    assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
}

#[test]
fn theme_state_serializes_with_lowercase_slugs() {
    let state = ThemeState::new(PaletteId::Violet, Mode::Light);
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, r#"{"palette":"violet","mode":"light"}"#);
    let back: ThemeState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn theme_error_messages_name_the_input() {
    assert_eq!(ThemeError::UnknownPalette("x".into()).to_string(), "unknown palette: x");
    assert_eq!(ThemeError::UnknownMode("y".into()).to_string(), "unknown mode: y");
}

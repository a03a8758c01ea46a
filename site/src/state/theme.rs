//! Palette and light/dark selection for the whole page.
//!
//! DESIGN
//! ======
//! `ThemeState` is a tiny `Copy` value held in an `RwSignal` context by the
//! root `App`. Components read `resolve()` to get the active appearance; the
//! palette table itself lives in `util::palette` and is never mutated.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::palette::{self, ResolvedColors};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced when decoding a stored or requested theme selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The palette slug is not one of the known palettes.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// The mode slug is neither `dark` nor `light`.
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}

// =============================================================================
// PALETTE ID
// =============================================================================

/// Closed set of selectable palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteId {
    #[default]
    Ocean,
    Forest,
    Sunset,
    Violet,
    Mono,
}

impl PaletteId {
    /// Every palette, in the order the picker shows them.
    pub const ALL: [PaletteId; 5] = [Self::Ocean, Self::Forest, Self::Sunset, Self::Violet, Self::Mono];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Violet => "violet",
            Self::Mono => "mono",
        }
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteId {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == raw.trim())
            .ok_or_else(|| ThemeError::UnknownPalette(raw.to_owned()))
    }
}

// =============================================================================
// MODE
// =============================================================================

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

// =============================================================================
// THEME STATE
// =============================================================================

/// Currently selected palette and mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    palette: PaletteId,
    mode: Mode,
}

impl ThemeState {
    #[must_use]
    pub fn new(palette: PaletteId, mode: Mode) -> Self {
        Self { palette, mode }
    }

    #[must_use]
    pub fn palette(&self) -> PaletteId {
        self.palette
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_palette(&mut self, palette: PaletteId) {
        self.palette = palette;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Appearance for the current (palette, mode) pair. Total over both enums.
    #[must_use]
    pub fn resolve(&self) -> ResolvedColors {
        palette::appearance(self.palette, self.mode)
    }
}

//! Static palette table.
//!
//! Every palette carries a dark and a light `Appearance`. The table is a
//! `static` array and lookup is an exhaustive `match`, so adding a
//! `PaletteId` variant without a table entry does not compile.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::state::theme::{Mode, PaletteId};
use crate::util::color::parse_hex_rgba;

/// Concrete colors for one palette in one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub background: &'static str,
    pub card: &'static str,
    pub card_hover: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent_muted: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub border_hover: &'static str,
    pub glow: &'static str,
}

/// The appearance currently in effect.
pub type ResolvedColors = &'static Appearance;

/// A named pair of appearances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub id: PaletteId,
    pub name: &'static str,
    pub dark: Appearance,
    pub light: Appearance,
}

impl Palette {
    #[must_use]
    pub fn appearance(&self, mode: Mode) -> &Appearance {
        match mode {
            Mode::Dark => &self.dark,
            Mode::Light => &self.light,
        }
    }
}

impl Appearance {
    /// All fields as `(custom property, value)` pairs.
    #[must_use]
    pub fn css_vars(&self) -> [(&'static str, &'static str); 12] {
        [
            ("--bg", self.background),
            ("--card", self.card),
            ("--card-hover", self.card_hover),
            ("--primary", self.primary),
            ("--secondary", self.secondary),
            ("--accent-muted", self.accent_muted),
            ("--text", self.text),
            ("--text-secondary", self.text_secondary),
            ("--text-muted", self.text_muted),
            ("--border", self.border),
            ("--border-hover", self.border_hover),
            ("--glow", self.glow),
        ]
    }

    /// Primary accent as a bare `r, g, b` triple for `rgba(var(--primary-rgb), a)`.
    #[must_use]
    pub fn primary_rgb(&self) -> String {
        let (r, g, b, _) = parse_hex_rgba(self.primary).unwrap_or((0, 0, 0, 255));
        format!("{r}, {g}, {b}")
    }

    /// Inline `style` attribute value declaring every custom property.
    #[must_use]
    pub fn inline_style(&self) -> String {
        let mut out = self
            .css_vars()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(" --primary-rgb: {};", self.primary_rgb()));
        out
    }
}

/// Look up a palette by id.
#[must_use]
pub fn palette(id: PaletteId) -> &'static Palette {
    let index = match id {
        PaletteId::Ocean => 0,
        PaletteId::Forest => 1,
        PaletteId::Sunset => 2,
        PaletteId::Violet => 3,
        PaletteId::Mono => 4,
    };
    &PALETTES[index]
}

/// Look up the appearance for a (palette, mode) pair.
#[must_use]
pub fn appearance(id: PaletteId, mode: Mode) -> &'static Appearance {
    palette(id).appearance(mode)
}

pub static PALETTES: [Palette; 5] = [
    Palette {
        id: PaletteId::Ocean,
        name: "Ocean",
        dark: Appearance {
            background: "#0a0f1a",
            card: "#111827",
            card_hover: "#1a2332",
            primary: "#38bdf8",
            secondary: "#818cf8",
            accent_muted: "#0e7490",
            text: "#f1f5f9",
            text_secondary: "#cbd5e1",
            text_muted: "#64748b",
            border: "#1e293b",
            border_hover: "#334155",
            glow: "#38bdf833",
        },
        light: Appearance {
            background: "#f8fafc",
            card: "#ffffff",
            card_hover: "#f1f5f9",
            primary: "#0284c7",
            secondary: "#4f46e5",
            accent_muted: "#bae6fd",
            text: "#0f172a",
            text_secondary: "#334155",
            text_muted: "#64748b",
            border: "#e2e8f0",
            border_hover: "#cbd5e1",
            glow: "#0284c726",
        },
    },
    Palette {
        id: PaletteId::Forest,
        name: "Forest",
        dark: Appearance {
            background: "#0b130f",
            card: "#121d17",
            card_hover: "#1a2a21",
            primary: "#34d399",
            secondary: "#a3e635",
            accent_muted: "#065f46",
            text: "#ecfdf5",
            text_secondary: "#c6d9cf",
            text_muted: "#6b8f7d",
            border: "#1f3329",
            border_hover: "#2d4a3b",
            glow: "#34d39933",
        },
        light: Appearance {
            background: "#f6faf7",
            card: "#ffffff",
            card_hover: "#ecf5ef",
            primary: "#059669",
            secondary: "#65a30d",
            accent_muted: "#bbf7d0",
            text: "#052e1c",
            text_secondary: "#2f4a3d",
            text_muted: "#5f7d6e",
            border: "#d9e8de",
            border_hover: "#b8d3c1",
            glow: "#05966926",
        },
    },
    Palette {
        id: PaletteId::Sunset,
        name: "Sunset",
        dark: Appearance {
            background: "#150d0b",
            card: "#1f1411",
            card_hover: "#2b1c17",
            primary: "#fb923c",
            secondary: "#f472b6",
            accent_muted: "#9a3412",
            text: "#fff7ed",
            text_secondary: "#e7d2c4",
            text_muted: "#9c7f6e",
            border: "#3a2720",
            border_hover: "#553a2f",
            glow: "#fb923c33",
        },
        light: Appearance {
            background: "#fffaf5",
            card: "#ffffff",
            card_hover: "#fff1e6",
            primary: "#ea580c",
            secondary: "#db2777",
            accent_muted: "#fed7aa",
            text: "#2a140a",
            text_secondary: "#5c3b2b",
            text_muted: "#8a6b5a",
            border: "#f3e0d2",
            border_hover: "#e5c4ad",
            glow: "#ea580c26",
        },
    },
    Palette {
        id: PaletteId::Violet,
        name: "Violet",
        dark: Appearance {
            background: "#0f0b1a",
            card: "#171127",
            card_hover: "#211935",
            primary: "#a78bfa",
            secondary: "#f0abfc",
            accent_muted: "#5b21b6",
            text: "#f5f3ff",
            text_secondary: "#d4cdea",
            text_muted: "#7f739e",
            border: "#2a2140",
            border_hover: "#3d3159",
            glow: "#a78bfa33",
        },
        light: Appearance {
            background: "#faf8ff",
            card: "#ffffff",
            card_hover: "#f3effe",
            primary: "#7c3aed",
            secondary: "#c026d3",
            accent_muted: "#ddd6fe",
            text: "#1e1433",
            text_secondary: "#43385c",
            text_muted: "#6f6589",
            border: "#e6e0f5",
            border_hover: "#cdc2ec",
            glow: "#7c3aed26",
        },
    },
    Palette {
        id: PaletteId::Mono,
        name: "Monochrome",
        dark: Appearance {
            background: "#0a0a0a",
            card: "#141414",
            card_hover: "#1f1f1f",
            primary: "#fafafa",
            secondary: "#a3a3a3",
            accent_muted: "#404040",
            text: "#fafafa",
            text_secondary: "#d4d4d4",
            text_muted: "#737373",
            border: "#262626",
            border_hover: "#404040",
            glow: "#fafafa1f",
        },
        light: Appearance {
            background: "#ffffff",
            card: "#fafafa",
            card_hover: "#f4f4f5",
            primary: "#171717",
            secondary: "#525252",
            accent_muted: "#d4d4d4",
            text: "#0a0a0a",
            text_secondary: "#404040",
            text_muted: "#737373",
            border: "#e5e5e5",
            border_hover: "#d4d4d4",
            glow: "#1717171a",
        },
    },
];

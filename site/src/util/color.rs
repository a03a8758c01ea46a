//! Hex color parsing for palette values.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` into RGBA channels.
///
/// Forms without an alpha channel are fully opaque.
pub fn parse_hex_rgba(raw: &str) -> Option<(u8, u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b, 255))
        }
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
        _ => None,
    }
}

/// Whether `raw` is a color `parse_hex_rgba` accepts.
pub fn is_hex_color(raw: &str) -> bool {
    parse_hex_rgba(raw).is_some()
}

use super::*;

#[test]
fn parse_hex_rgba_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgba("#ABC"), Some((170, 187, 204, 255)));
    assert_eq!(parse_hex_rgba("  #a1B2c3 "), Some((161, 178, 195, 255)));
}

#[test]
fn parse_hex_rgba_reads_alpha_channel() {
    assert_eq!(parse_hex_rgba("#38bdf833"), Some((56, 189, 248, 51)));
    assert_eq!(parse_hex_rgba("#000000ff"), Some((0, 0, 0, 255)));
}

#[test]
fn parse_hex_rgba_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgba("AABBCC"), None);
    assert_eq!(parse_hex_rgba("#12"), None);
    assert_eq!(parse_hex_rgba("#abcd"), None);
    assert_eq!(parse_hex_rgba("#12GG34"), None);
    assert_eq!(parse_hex_rgba("#ééé"), None);
}

#[test]
fn is_hex_color_matches_parse() {
    assert!(is_hex_color("#fff"));
    assert!(!is_hex_color("blue"));
    assert!(!is_hex_color(""));
}

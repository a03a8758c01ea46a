use super::*;

#[test]
fn nav_scrolled_only_past_threshold() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(NAV_SCROLL_THRESHOLD));
    assert!(nav_scrolled(NAV_SCROLL_THRESHOLD + 1.0));
}

#[test]
fn magnetic_offset_scales_distance_from_center() {
    assert_eq!(magnetic_offset((110.0, 40.0), (100.0, 50.0), 0.5), (5.0, -5.0));
}

#[test]
fn magnetic_offset_is_zero_at_center() {
    assert_eq!(magnetic_offset((10.0, 10.0), (10.0, 10.0), MAGNETIC_STRENGTH), (0.0, 0.0));
}

#[test]
fn translate_css_formats_one_decimal() {
    assert_eq!(translate_css((3.0, -1.24)), "translate(3.0px, -1.2px)");
}

#[test]
fn should_reveal_uses_viewport_ratio() {
    assert!(should_reveal(100.0, 1000.0));
    assert!(should_reveal(-50.0, 1000.0));
    assert!(!should_reveal(850.0, 1000.0));
    assert!(!should_reveal(1200.0, 1000.0));
}

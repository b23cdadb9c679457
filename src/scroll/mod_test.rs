use super::*;

#[test]
fn header_shadow_starts_after_first_pixel() {
    assert!(!header_is_scrolled(0.0));
    assert!(header_is_scrolled(0.5));
    assert!(header_is_scrolled(1200.0));
}

#[test]
fn back_to_top_needs_more_than_one_viewport() {
    assert!(!back_to_top_visible(0.0, 800.0));
    assert!(!back_to_top_visible(800.0, 800.0));
    assert!(back_to_top_visible(800.5, 800.0));
}


use super::*;

const TOPS: [f64; 4] = [600.0, 1400.0, 2200.0, 3000.0];

#[test]
fn no_sections_means_no_active_link() {
    assert_eq!(active_section(&[], 0.0), None);
    assert_eq!(active_section(&[], 5000.0), None);
}

#[test]
fn top_of_page_forces_first_section() {
    assert_eq!(active_section(&TOPS, 0.0), Some(0));
    assert_eq!(active_section(&TOPS, 349.0), Some(0));
}

#[test]
fn slack_band_above_first_section_is_empty() {
    // cursor 500 is neither below 600 - 100 nor past 600.
    assert_eq!(active_section(&TOPS, 350.0), None);
    assert_eq!(active_section(&TOPS, 449.0), None);
}

#[test]
fn deepest_passed_section_wins() {
    assert_eq!(active_section(&TOPS, 450.0), Some(0));
    assert_eq!(active_section(&TOPS, 1249.0), Some(0));
    assert_eq!(active_section(&TOPS, 1250.0), Some(1));
    assert_eq!(active_section(&TOPS, 2100.0), Some(2));
    assert_eq!(active_section(&TOPS, 9000.0), Some(3));
}

#[test]
fn first_section_at_page_top() {
    assert_eq!(active_section(&[0.0, 900.0], 0.0), Some(0));
}

#[test]
fn fragment_target_requires_hash_and_id() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("about.html#team"), None);
    assert_eq!(fragment_target(""), None);
}

use super::*;

fn active(path: &str, href: &str) -> bool {
    link_is_active(&PageLocation::from_pathname(path), href)
}

#[test]
fn location_splits_lowercased_file() {
    let loc = PageLocation::from_pathname("/About/Team.HTML");
    assert_eq!(loc.path, "/about/team.html");
    assert_eq!(loc.file, "team.html");
    assert_eq!(loc.page(), "team");
}

#[test]
fn location_at_root_has_empty_file() {
    let loc = PageLocation::from_pathname("/");
    assert_eq!(loc.file, "");
    assert_eq!(loc.page(), "");
}

#[test]
fn team_page_marks_team_link_only() {
    assert!(active("/team.html", "team.html"));
    assert!(!active("/team.html", "index.html"));
    assert!(!active("/team.html", "privacy.html"));
}

#[test]
fn extensionless_paths_match_html_links() {
    assert!(active("/services", "services.html"));
    assert!(active("/services.html", "/services"));
}

#[test]
fn href_directories_are_ignored() {
    assert!(active("/work/portfolio.html", "../portfolio.html"));
    assert!(active("/portfolio.html", "https://example.test/Portfolio.html"));
}

#[test]
fn section_tokens_match_by_substring() {
    assert!(active("/team/alice.html", "team.html"));
    assert!(active("/legal/privacy-policy", "privacy.html"));
    assert!(active("/imprint-de.html", "imprint.html"));
    assert!(!active("/contact.html", "imprint.html"));
}

#[test]
fn substring_rule_preserves_known_false_positive() {
    assert!(active("/steam-engines.html", "team.html"));
}

#[test]
fn index_link_is_active_at_root_and_index() {
    assert!(active("/", "index.html"));
    assert!(active("", "index.html"));
    assert!(active("/index.html", "index.html"));
    assert!(!active("/about.html", "index.html"));
}

#[test]
fn trailing_slash_href_uses_whole_href() {
    assert!(!active("/", "/"));
    assert!(!active("/about.html", "/docs/"));
}

#[test]
fn expanded_after_toggle_negates_true_only() {
    assert!(!expanded_after_toggle(Some("true")));
    assert!(expanded_after_toggle(Some("false")));
    assert!(expanded_after_toggle(None));
}

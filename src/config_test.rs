use super::*;

#[test]
fn defaults_match_documented_values() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.tooltip_delay_ms, 150);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.scroll_target_id, "portfolio");
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn empty_island_yields_defaults() {
    let config = SiteConfig::from_json("  \n ").expect("empty is valid");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_island_overrides_only_named_fields() {
    let config = SiteConfig::from_json(r#"{ "resize_debounce_ms": 400, "log_level": "debug" }"#)
        .expect("valid json");
    assert_eq!(config.resize_debounce_ms, 400);
    assert_eq!(config.log_level(), log::Level::Debug);
    assert_eq!(config.tooltip_delay_ms, 150);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{ "colour": "teal" }"#).expect("valid json");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_island_is_a_config_error() {
    let err = SiteConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = SiteConfig { log_level: "chatty".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}

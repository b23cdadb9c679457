use super::*;

#[test]
fn display_messages_name_the_missing_piece() {
    assert_eq!(SiteError::NoWindow.to_string(), "window is not available");
    assert_eq!(SiteError::NoDocument.to_string(), "document is not available");
    assert_eq!(SiteError::NoBody.to_string(), "document body is not available");
    assert_eq!(SiteError::Js("boom".to_owned()).to_string(), "javascript error: boom");
}

#[test]
fn serde_errors_convert_into_config_variant() {
    let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
    let site: SiteError = err.into();
    assert!(matches!(site, SiteError::Config(_)));
    assert!(site.to_string().starts_with("invalid configuration"));
}

#[test]
fn absorb_accepts_ok_and_err() {
    Ok::<u8, SiteError>(1).absorb("ok path");
    Err::<u8, SiteError>(SiteError::NoBody).absorb("err path");
}

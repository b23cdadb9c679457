use super::*;

fn variants(light: Option<&str>, dark: Option<&str>, hover: Option<&str>) -> ImageVariants {
    ImageVariants {
        light: light.map(str::to_owned),
        dark: dark.map(str::to_owned),
        hover: hover.map(str::to_owned),
    }
}

#[test]
fn themed_requires_both_variants() {
    let both = variants(Some("l.png"), Some("d.png"), None);
    assert_eq!(both.themed(true), Some("d.png"));
    assert_eq!(both.themed(false), Some("l.png"));

    assert_eq!(variants(Some("l.png"), None, None).themed(false), None);
    assert_eq!(variants(None, Some("d.png"), None).themed(true), None);
}

#[test]
fn card_default_prefers_hover_on_touch_layout() {
    let img = variants(Some("x.png"), Some("x-dark.png"), Some("x-hover.png"));
    assert_eq!(img.card_default(false, true), Some("x-hover.png"));
    assert_eq!(img.card_default(true, true), Some("x-hover.png"));
    assert_eq!(img.card_default(true, false), Some("x-dark.png"));
}

#[test]
fn card_default_without_hover_falls_back_to_theme() {
    let img = variants(Some("x.png"), Some("x-dark.png"), None);
    assert_eq!(img.card_default(true, true), Some("x-dark.png"));
}

#[test]
fn resting_source_order() {
    let img = variants(Some("l.png"), Some("d.png"), None);
    assert_eq!(img.resting(true, "cur.png"), "d.png");
    assert_eq!(img.resting(false, "cur.png"), "l.png");

    let light_only = variants(Some("l.png"), None, None);
    assert_eq!(light_only.resting(true, "cur.png"), "l.png");

    let none = ImageVariants::default();
    assert_eq!(none.resting(true, "cur.png"), "cur.png");
}

#[test]
fn derive_hover_inserts_suffix_before_extension() {
    assert_eq!(derive_hover_src("/img/a.png"), "/img/a-hover.png");
    assert_eq!(derive_hover_src("/img/a.jpg"), "/img/a-hover.jpg");
    assert_eq!(derive_hover_src("https://x.test/a.svg"), "https://x.test/a-hover.svg");
    assert_eq!(derive_hover_src("/img/a.webp"), "/img/a.webp");
}

#[test]
fn derive_hover_rewrites_first_occurrence_only() {
    assert_eq!(derive_hover_src("a.png.png"), "a-hover.png.png");
}

#[test]
fn hover_or_derived_prefers_declared() {
    let declared = variants(None, None, Some("h.png"));
    assert_eq!(declared.hover_or_derived("a.png"), "h.png");
    assert_eq!(ImageVariants::default().hover_or_derived("a.png"), "a-hover.png");
}

#[test]
fn narrow_viewport_card_shows_hover_variant() {
    let img = variants(Some("x.png"), Some("x-dark.png"), Some("x-hover.png"));
    assert_eq!(img.card_source(false, true, "x.png"), "x-hover.png");
}

#[test]
fn wide_viewport_card_shows_theme_variant() {
    let img = variants(Some("x.png"), Some("x-dark.png"), Some("x-hover.png"));
    assert_eq!(img.card_source(true, false, "x-hover.png"), "x-dark.png");
    assert_eq!(img.card_source(false, false, "x-hover.png"), "x.png");
}

#[test]
fn narrow_viewport_card_without_hover_shows_theme_variant() {
    let img = variants(Some("x.png"), Some("x-dark.png"), None);
    assert_eq!(img.card_source(false, true, "x-hover.png"), "x.png");
    assert_eq!(img.card_source(true, true, "x-hover.png"), "x-dark.png");

    let bare = ImageVariants::default();
    assert_eq!(bare.card_source(false, true, "x-hover.png"), "x-hover.png");
}

#[test]
fn repeated_card_refresh_is_stable() {
    let cases = [
        variants(Some("x.png"), Some("x-dark.png"), None),
        variants(Some("x.png"), Some("x-dark.png"), Some("x-hover.png")),
        variants(Some("x.png"), None, None),
        ImageVariants::default(),
    ];
    for img in &cases {
        for (dark, touch_layout) in [(false, true), (true, true), (false, false), (true, false)] {
            let attached = img.hover_or_derived("x.png");
            let first = img.card_source(dark, touch_layout, &attached).to_owned();
            let second = img.card_source(dark, touch_layout, &first).to_owned();
            assert_eq!(first, second, "{img:?} dark={dark} touch={touch_layout}");
            assert!(!second.contains("-hover-hover"), "{img:?} produced {second}");
        }
    }
}

//! Theme Controller: applies the preference to the page and wires the toggles.

use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryList, Window};

use super::tooltip::Tooltip;
use super::{PressFeedback, ThemeMode, ThemePreference, ToggleAppearance};
use crate::config::SiteConfig;
use crate::consts::{
    ATTR_MODE, CLASS_THEME_DARK, CLASS_THEME_LIGHT, PRESS_ANIMATION_MS, QUERY_COMPACT_TOGGLE,
    QUERY_DESKTOP, QUERY_PREFERS_DARK, QUERY_TOUCH_LAYOUT, SELECTOR_BRAND_LOGO,
    SELECTOR_PORTFOLIO_IMG, SELECTOR_THEME_TOGGLE,
};
use crate::dom;
use crate::error::{Absorb, SiteError};
use crate::images::ImageVariants;

pub struct ThemeController {
    window: Window,
    document: Document,
    preference: Rc<ThemePreference>,
    prefers_dark: Option<MediaQueryList>,
    compact: Option<MediaQueryList>,
    desktop: Option<MediaQueryList>,
    tooltip_delay_ms: u32,
}

impl ThemeController {
    #[must_use]
    pub fn new(
        window: Window,
        document: Document,
        preference: Rc<ThemePreference>,
        config: &SiteConfig,
    ) -> Self {
        Self {
            prefers_dark: dom::media_query(&window, QUERY_PREFERS_DARK),
            compact: dom::media_query(&window, QUERY_COMPACT_TOGGLE),
            desktop: dom::media_query(&window, QUERY_DESKTOP),
            window,
            document,
            preference,
            tooltip_delay_ms: config.tooltip_delay_ms,
        }
    }

    /// Normalize the stored preference, render it, and register listeners.
    pub fn attach(self) -> Result<(), SiteError> {
        let controller = Rc::new(self);
        let mode = controller.preference.load();
        controller.render(mode);

        if let Some(list) = &controller.prefers_dark {
            let this = Rc::clone(&controller);
            dom::listen(list, "change", move |_| {
                if this.preference.current() == ThemeMode::System {
                    this.render(ThemeMode::System);
                }
            })?;
        }

        if let Some(list) = &controller.compact {
            let this = Rc::clone(&controller);
            dom::listen(list, "change", move |_| {
                this.update_toggle_ui(this.preference.current())
                    .absorb("refresh theme toggles");
            })?;
        }

        for button in dom::query_all(&controller.document, SELECTOR_THEME_TOGGLE)? {
            let this = Rc::clone(&controller);
            let pressed = button.clone();
            dom::listen(&button, "click", move |_| this.on_click(&pressed))?;
            Tooltip::attach(&button, controller.desktop.clone(), controller.tooltip_delay_ms)?;
        }

        log::debug!("theme controller attached with preference {mode}");
        Ok(())
    }

    fn render(&self, mode: ThemeMode) {
        self.apply_theme(mode).absorb("apply theme");
        self.update_toggle_ui(mode).absorb("update theme toggles");
    }

    fn system_prefers_dark(&self) -> bool {
        self.prefers_dark.as_ref().is_some_and(MediaQueryList::matches)
    }

    /// Set the body class flags and swap every themed image to the matching variant.
    pub fn apply_theme(&self, mode: ThemeMode) -> Result<(), SiteError> {
        let body = dom::body(&self.document)?;
        dom::remove_class(&body, CLASS_THEME_DARK);
        dom::remove_class(&body, CLASS_THEME_LIGHT);
        if let Some(class) = mode.body_class() {
            dom::add_class(&body, class);
        }

        let dark = mode.is_dark(self.system_prefers_dark());
        for logo in dom::query_all(&self.document, SELECTOR_BRAND_LOGO)? {
            if let Some(src) = ImageVariants::from_element(&logo).themed(dark) {
                dom::set_attr(&logo, "src", src);
            }
        }

        let touch_layout = dom::media_matches(&self.window, QUERY_TOUCH_LAYOUT);
        for img in dom::query_all(&self.document, SELECTOR_PORTFOLIO_IMG)? {
            if let Some(src) = ImageVariants::from_element(&img).card_default(dark, touch_layout) {
                dom::set_attr(&img, "src", src);
            }
        }
        Ok(())
    }

    /// Re-render every toggle's icon, label and pressed state for `mode`.
    pub fn update_toggle_ui(&self, mode: ThemeMode) -> Result<(), SiteError> {
        let compact = self.compact.as_ref().is_some_and(MediaQueryList::matches);
        let appearance = ToggleAppearance::new(mode, compact);
        let pressed = if appearance.aria_pressed { "true" } else { "false" };
        for button in dom::query_all(&self.document, SELECTOR_THEME_TOGGLE)? {
            dom::set_attr(&button, ATTR_MODE, mode.as_str());
            button.set_inner_html(&appearance.inner_html());
            button.remove_attribute("title").absorb("clear toggle title");
            dom::set_attr(&button, "aria-label", &appearance.aria_label);
            dom::set_attr(&button, "aria-pressed", pressed);
        }
        Ok(())
    }

    fn on_click(&self, button: &Element) {
        let next = self.preference.cycle();
        log::debug!("theme preference -> {next}");
        self.render(next);

        if self.desktop.as_ref().is_some_and(MediaQueryList::matches) {
            play_press_feedback(button).absorb("theme toggle animation");
        }
    }
}

/// Short scale pulse via `Element.animate`; missing API support is an error the caller absorbs.
fn play_press_feedback(button: &Element) -> Result<(), SiteError> {
    let feedback = PressFeedback::from_hover(button.matches(":hover")?);
    let keyframes = Array::new();
    for transform in feedback.transforms() {
        let frame = Object::new();
        Reflect::set(&frame, &"transform".into(), &transform.into())?;
        keyframes.push(&frame);
    }
    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &PRESS_ANIMATION_MS.into())?;
    Reflect::set(&options, &"easing".into(), &"ease-out".into())?;

    let animate = Reflect::get(button, &"animate".into())?;
    let Some(animate) = animate.dyn_ref::<Function>() else {
        return Err(SiteError::Js("Element.animate is not supported".to_owned()));
    };
    animate.call2(button, &keyframes, &options)?;
    Ok(())
}

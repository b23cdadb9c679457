//! Scroll Effects: header shadow, back-to-top, scroll-down button.

use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use super::{back_to_top_visible, header_is_scrolled};
use crate::config::SiteConfig;
use crate::consts::{
    CLASS_SCROLLED, CLASS_VISIBLE, SELECTOR_BACK_TO_TOP, SELECTOR_SCROLL_DOWN, SELECTOR_SITE_HEADER,
};
use crate::dom;
use crate::error::SiteError;

pub struct ScrollEffects {
    window: Window,
    document: Document,
    target_id: String,
}

impl ScrollEffects {
    #[must_use]
    pub fn new(window: Window, document: Document, config: &SiteConfig) -> Self {
        Self { window, document, target_id: config.scroll_target_id.clone() }
    }

    pub fn attach(self) -> Result<(), SiteError> {
        self.attach_scroll_down()?;
        self.attach_header()?;
        self.attach_back_to_top()?;
        log::debug!("scroll effects attached");
        Ok(())
    }

    fn attach_scroll_down(&self) -> Result<(), SiteError> {
        let Some(button) = dom::query_one(&self.document, SELECTOR_SCROLL_DOWN)? else {
            return Ok(());
        };
        let document = self.document.clone();
        let target_id = self.target_id.clone();
        dom::listen(&button, "click", move |_| {
            if let Some(section) = document.get_element_by_id(&target_id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    }

    fn attach_header(&self) -> Result<(), SiteError> {
        let Some(header) = dom::query_one(&self.document, SELECTOR_SITE_HEADER)? else {
            return Ok(());
        };
        let window = self.window.clone();
        let target = header.clone();
        dom::listen(&self.window, "scroll", move |_| {
            dom::set_class(&target, CLASS_SCROLLED, header_is_scrolled(dom::scroll_top(&window)));
        })?;

        // Avoid an unshadowed header flash when the page loads mid-scroll.
        if header_is_scrolled(dom::scroll_top(&self.window)) {
            dom::add_class(&header, CLASS_SCROLLED);
        }
        Ok(())
    }

    fn attach_back_to_top(&self) -> Result<(), SiteError> {
        let Some(button) = dom::query_one(&self.document, SELECTOR_BACK_TO_TOP)? else {
            return Ok(());
        };
        let window = self.window.clone();
        let target = button.clone();
        dom::listen(&self.window, "scroll", move |_| {
            let visible = back_to_top_visible(dom::scroll_top(&window), dom::viewport_height(&window));
            dom::set_class(&target, CLASS_VISIBLE, visible);
        })?;

        let window = self.window.clone();
        dom::listen(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })
    }
}

//! Navigation Controller: mobile menu and active-link highlighting.

use std::rc::Rc;

use web_sys::{Document, Element, Event, Window};

use super::{PageLocation, expanded_after_toggle, link_is_active};
use crate::consts::{
    CLASS_ACTIVE, CLASS_OPEN, SELECTOR_FOOTER_LINKS, SELECTOR_NAV_LINKS, SELECTOR_NAV_TOGGLE,
    SITE_NAV_ID,
};
use crate::dom;
use crate::error::{Absorb, SiteError};

pub struct NavController {
    window: Window,
    document: Document,
}

/// The collapsible `#site-nav` panel and its optional toggle button.
struct MobileMenu {
    toggle: Option<Element>,
    panel: Element,
}

impl MobileMenu {
    fn flip(&self) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let expanded = expanded_after_toggle(toggle.get_attribute("aria-expanded").as_deref());
        dom::set_attr(toggle, "aria-expanded", if expanded { "true" } else { "false" });
        self.panel.class_list().toggle(CLASS_OPEN).absorb("toggle nav panel");
    }

    fn close(&self) {
        if !dom::has_class(&self.panel, CLASS_OPEN) {
            return;
        }
        dom::remove_class(&self.panel, CLASS_OPEN);
        if let Some(toggle) = &self.toggle {
            dom::set_attr(toggle, "aria-expanded", "false");
        }
    }

    fn contains(&self, event: &Event) -> bool {
        dom::contains_target(&self.panel, event)
            || self.toggle.as_ref().is_some_and(|toggle| dom::contains_target(toggle, event))
    }
}

impl NavController {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn attach(self) -> Result<(), SiteError> {
        self.attach_menu()?;
        self.highlight_links()?;
        log::debug!("nav controller attached");
        Ok(())
    }

    fn attach_menu(&self) -> Result<(), SiteError> {
        let Some(panel) = self.document.get_element_by_id(SITE_NAV_ID) else {
            return Ok(());
        };
        let toggle = dom::query_one(&self.document, SELECTOR_NAV_TOGGLE)?;
        let menu = Rc::new(MobileMenu { toggle, panel });

        if let Some(toggle) = &menu.toggle {
            let this = Rc::clone(&menu);
            dom::listen(toggle, "click", move |_| this.flip())?;
        }

        let this = Rc::clone(&menu);
        dom::listen(&menu.panel, "click", move |event| {
            let on_link = dom::event_element(&event)
                .is_some_and(|el| el.tag_name().eq_ignore_ascii_case("a"));
            if on_link {
                this.close();
            }
        })?;

        let this = Rc::clone(&menu);
        dom::listen(&self.window, "scroll", move |_| this.close())?;

        let this = Rc::clone(&menu);
        dom::listen(&self.document, "click", move |event| {
            if !this.contains(&event) {
                this.close();
            }
        })?;
        Ok(())
    }

    /// Mark nav and footer links that point at the current page. Runs once.
    fn highlight_links(&self) -> Result<(), SiteError> {
        let location = PageLocation::from_pathname(&self.window.location().pathname()?);
        for selector in [SELECTOR_NAV_LINKS, SELECTOR_FOOTER_LINKS] {
            for link in dom::query_all(&self.document, selector)? {
                let Some(href) = link.get_attribute("href").filter(|href| !href.is_empty()) else {
                    continue;
                };
                if link_is_active(&location, &href) {
                    dom::add_class(&link, CLASS_ACTIVE);
                }
            }
        }
        Ok(())
    }
}

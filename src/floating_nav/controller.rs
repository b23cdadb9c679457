//! Floating Section Nav Highlighter.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::{active_section, fragment_target};
use crate::consts::{CLASS_ACTIVE, SELECTOR_FLOATING_LINKS};
use crate::dom;
use crate::error::SiteError;

pub struct FloatingNav {
    window: Window,
    links: Vec<Element>,
    /// `(link, section)` for every link whose target exists, in link order.
    sections: Vec<(Element, HtmlElement)>,
}

impl FloatingNav {
    /// Collect the floating nav links and resolve their target sections once.
    pub fn new(window: Window, document: &Document) -> Result<Self, SiteError> {
        let links = dom::query_all(document, SELECTOR_FLOATING_LINKS)?;
        let sections = links
            .iter()
            .filter_map(|link| {
                let href = link.get_attribute("href")?;
                let section = document.get_element_by_id(fragment_target(&href)?)?;
                let section = section.dyn_ref::<HtmlElement>()?.clone();
                Some((link.clone(), section))
            })
            .collect();
        Ok(Self { window, links, sections })
    }

    pub fn attach(self) -> Result<(), SiteError> {
        if self.links.is_empty() {
            return Ok(());
        }
        let nav = Rc::new(self);
        let this = Rc::clone(&nav);
        dom::listen(&nav.window, "scroll", move |_| this.update())?;
        nav.update();
        log::debug!("floating nav attached with {} sections", nav.sections.len());
        Ok(())
    }

    /// Clear every link, then mark the one for the section under the cursor.
    fn update(&self) {
        let tops: Vec<f64> = self
            .sections
            .iter()
            .map(|(_, section)| f64::from(section.offset_top()))
            .collect();
        let active = active_section(&tops, dom::scroll_top(&self.window));

        for link in &self.links {
            dom::remove_class(link, CLASS_ACTIVE);
        }
        if let Some((link, _)) = active.and_then(|index| self.sections.get(index)) {
            dom::add_class(link, CLASS_ACTIVE);
        }
    }
}

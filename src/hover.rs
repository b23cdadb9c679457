//! Hover Image Swap for portfolio cards.
//!
//! Wide layouts swap a card's image to its hover variant while the pointer is
//! over the card. Touch layouts have no hover, so the hover variant is shown
//! from the start and no pointer listeners are attached. A debounced resize
//! resets every card image from its declared variants.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, MediaQueryList, Window};

use crate::config::SiteConfig;
use crate::consts::{QUERY_PREFERS_DARK, QUERY_TOUCH_LAYOUT, SELECTOR_CARD, SELECTOR_CARD_IMG};
use crate::dom;
use crate::error::{Absorb, SiteError};
use crate::images::ImageVariants;
use crate::theme::ThemePreference;

pub struct HoverSwap {
    window: Window,
    document: Document,
    preference: Rc<ThemePreference>,
    prefers_dark: Option<MediaQueryList>,
    debounce_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl HoverSwap {
    #[must_use]
    pub fn new(
        window: Window,
        document: Document,
        preference: Rc<ThemePreference>,
        config: &SiteConfig,
    ) -> Self {
        Self {
            prefers_dark: dom::media_query(&window, QUERY_PREFERS_DARK),
            window,
            document,
            preference,
            debounce_ms: config.resize_debounce_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn attach(self) -> Result<(), SiteError> {
        let swap = Rc::new(self);
        let touch_layout = dom::media_matches(&swap.window, QUERY_TOUCH_LAYOUT);

        for (card, img) in swap.card_images()? {
            let hover = ImageVariants::from_element(&img).hover_or_derived(&current_src(&img));
            if touch_layout {
                dom::set_attr(&img, "src", &hover);
                continue;
            }

            let target = img.clone();
            dom::listen(&card, "mouseenter", move |_| dom::set_attr(&target, "src", &hover))?;

            let this = Rc::clone(&swap);
            dom::listen(&card, "mouseleave", move |_| {
                let variants = ImageVariants::from_element(&img);
                let current = current_src(&img);
                dom::set_attr(&img, "src", variants.resting(this.is_dark(), &current));
            })?;
        }

        let this = Rc::clone(&swap);
        dom::listen(&swap.window, "resize", move |_| this.schedule_refresh())?;
        log::debug!("hover swap attached (touch layout: {touch_layout})");
        Ok(())
    }

    fn is_dark(&self) -> bool {
        let system_dark = self.prefers_dark.as_ref().is_some_and(MediaQueryList::matches);
        self.preference.current().is_dark(system_dark)
    }

    /// `(card, image)` pairs for every card that has a media image.
    fn card_images(&self) -> Result<Vec<(Element, Element)>, SiteError> {
        let mut pairs = Vec::new();
        for card in dom::query_all(&self.document, SELECTOR_CARD)? {
            if let Some(img) = dom::query_one_within(&card, SELECTOR_CARD_IMG)? {
                pairs.push((card, img));
            }
        }
        Ok(pairs)
    }

    /// Last resize wins: replacing the pending timeout cancels the earlier one.
    fn schedule_refresh(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let timeout = Timeout::new(self.debounce_ms, move || {
            this.refresh().absorb("refresh card images");
        });
        *self.pending.borrow_mut() = Some(timeout);
    }

    fn refresh(&self) -> Result<(), SiteError> {
        let touch_layout = dom::media_matches(&self.window, QUERY_TOUCH_LAYOUT);
        let dark = self.is_dark();
        for (_, img) in self.card_images()? {
            let variants = ImageVariants::from_element(&img);
            let current = current_src(&img);
            dom::set_attr(&img, "src", variants.card_source(dark, touch_layout, &current));
        }
        Ok(())
    }
}

fn current_src(img: &Element) -> String {
    match img.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.src(),
        None => img.get_attribute("src").unwrap_or_default(),
    }
}

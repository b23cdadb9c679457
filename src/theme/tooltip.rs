//! Delayed hover tooltip for a theme toggle (desktop only).

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MediaQueryList};

use super::{ThemeMode, tooltip_anchor};
use crate::consts::{ATTR_MODE, TOOLTIP_CLASS};
use crate::dom;
use crate::error::{Absorb, SiteError};

pub(super) struct Tooltip {
    button: Element,
    desktop: Option<MediaQueryList>,
    delay_ms: u32,
    bubble: RefCell<Option<HtmlElement>>,
    pending: RefCell<Option<Timeout>>,
}

impl Tooltip {
    /// Wire pointer-enter/leave on `button`.
    pub(super) fn attach(
        button: &Element,
        desktop: Option<MediaQueryList>,
        delay_ms: u32,
    ) -> Result<(), SiteError> {
        let tooltip = Rc::new(Self {
            button: button.clone(),
            desktop,
            delay_ms,
            bubble: RefCell::new(None),
            pending: RefCell::new(None),
        });

        let on_enter = Rc::clone(&tooltip);
        dom::listen(button, "mouseenter", move |_| on_enter.schedule())?;
        let on_leave = Rc::clone(&tooltip);
        dom::listen(button, "mouseleave", move |_| on_leave.hide())?;
        Ok(())
    }

    fn is_desktop(&self) -> bool {
        self.desktop.as_ref().is_some_and(MediaQueryList::matches)
    }

    /// Replacing the pending timeout cancels the previous one.
    fn schedule(self: &Rc<Self>) {
        if !self.is_desktop() {
            return;
        }
        let this = Rc::clone(self);
        let timeout = Timeout::new(self.delay_ms, move || this.show());
        *self.pending.borrow_mut() = Some(timeout);
    }

    fn hide(&self) {
        if !self.is_desktop() {
            return;
        }
        drop(self.pending.borrow_mut().take());
        if let Some(bubble) = self.bubble.borrow().as_ref() {
            bubble.style().set_property("opacity", "0").absorb("hide tooltip");
        }
    }

    fn show(&self) {
        if !self.is_desktop() {
            return;
        }
        if let Err(err) = self.render() {
            log::debug!("theme tooltip: {err}");
        }
    }

    fn render(&self) -> Result<(), SiteError> {
        let mode = self
            .button
            .get_attribute(ATTR_MODE)
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or_default();
        let bubble = self.bubble()?;
        bubble.set_text_content(Some(mode.description()));

        let rect = self.button.get_bounding_client_rect();
        let (x, y) = tooltip_anchor(rect.left(), rect.top(), rect.width());
        let style = bubble.style();
        style.set_property("left", &format!("{x}px"))?;
        style.set_property("top", &format!("{y}px"))?;
        style.set_property("transform", "translate(-50%, -100%)")?;
        style.set_property("opacity", "1")?;
        Ok(())
    }

    /// The bubble element, created and appended to `<body>` on first use.
    fn bubble(&self) -> Result<HtmlElement, SiteError> {
        if let Some(existing) = self.bubble.borrow().as_ref() {
            return Ok(existing.clone());
        }
        let document = dom::document()?;
        let bubble: HtmlElement = document.create_element("div")?.unchecked_into();
        bubble.set_class_name(TOOLTIP_CLASS);
        dom::body(&document)?.append_child(&bubble)?;
        *self.bubble.borrow_mut() = Some(bubble.clone());
        Ok(bubble)
    }
}

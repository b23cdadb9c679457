//! Thin web-sys glue shared by the browser components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components only call into this module for lookups, listeners, class
//! toggles and media queries, so the `wasm_bindgen` closure plumbing lives in
//! one place. Listeners registered here live for the lifetime of the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MediaQueryList, NodeList, Window};

use crate::error::{Absorb, SiteError};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, SiteError> {
    document.body().ok_or(SiteError::NoBody)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(document.query_selector(selector)?)
}

pub fn query_one_within(root: &Element, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(root.query_selector(selector)?)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), SiteError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once on the next animation frame.
pub fn next_frame<F>(window: &Window, f: F) -> Result<(), SiteError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.request_animation_frame(callback.unchecked_ref())?;
    Ok(())
}

pub fn media_query(window: &Window, query: &str) -> Option<MediaQueryList> {
    match window.match_media(query) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("matchMedia({query}): {}", SiteError::from(err));
            None
        }
    }
}

/// Whether `query` currently matches; unsupported queries read as `false`.
pub fn media_matches(window: &Window, query: &str) -> bool {
    media_query(window, query).is_some_and(|list| list.matches())
}

/// Vertical scroll offset of the page.
pub fn scroll_top(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(y) => y,
        Err(_) => window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |root| f64::from(root.scroll_top())),
    }
}

pub fn viewport_height(window: &Window) -> f64 {
    dimension(window.inner_height()).unwrap_or_else(|| {
        window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |root| f64::from(root.client_height()))
    })
}

pub fn viewport_width(window: &Window) -> f64 {
    dimension(window.inner_width()).unwrap_or_else(|| {
        window
            .document()
            .and_then(|doc| doc.document_element())
            .map_or(0.0, |root| f64::from(root.client_width()))
    })
}

fn dimension(value: Result<JsValue, JsValue>) -> Option<f64> {
    match value {
        Ok(value) => value.as_f64().filter(|v| *v > 0.0),
        Err(_) => None,
    }
}

// ── Class and attribute helpers ─────────────────────────────────

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn add_class(el: &Element, class: &str) {
    el.class_list().add_1(class).absorb("add class");
}

pub fn remove_class(el: &Element, class: &str) {
    el.class_list().remove_1(class).absorb("remove class");
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) {
    el.set_attribute(name, value).absorb("set attribute");
}

/// Element the event was dispatched to, if it is an element.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

/// Whether `root` is, or contains, the event's target node.
pub fn contains_target(root: &Element, event: &Event) -> bool {
    let target = event.target();
    let node = target.as_ref().and_then(|t| t.dyn_ref::<web_sys::Node>());
    node.is_some() && root.contains(node)
}

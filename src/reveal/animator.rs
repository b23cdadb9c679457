//! Reveal-on-Scroll Animator: intersection observers plus the initial sweep.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use super::{Bounds, Readiness, RevealGroup, RevealRole, RevealState, plan_initial_sweep};
use crate::consts::{
    CLASS_CARD, CLASS_IS_HIDDEN, CLASS_IS_VISIBLE, CLASS_TEAM_MEMBER, REVEAL_SETTLE_MS,
    SELECTOR_REVEAL,
};
use crate::dom;
use crate::error::{Absorb, SiteError};

pub struct RevealAnimator {
    window: Window,
    document: Document,
}

impl RevealAnimator {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn attach(self) -> Result<(), SiteError> {
        let elements = dom::query_all(&self.document, SELECTOR_REVEAL)?;
        if elements.is_empty() {
            return Ok(());
        }
        for el in &elements {
            if state_of(el) == RevealState::Hidden {
                dom::add_class(el, CLASS_IS_HIDDEN);
            }
        }

        let elements = Rc::new(elements);
        self.schedule_initial_sweeps(&elements)?;

        for group in RevealGroup::ALL {
            let observer = GroupObserver::new(group)?;
            for el in elements.iter().filter(|el| group.accepts(role_of(el))) {
                observer.observe(el);
            }
        }

        log::debug!("reveal animator attached to {} elements", elements.len());
        Ok(())
    }

    fn schedule_initial_sweeps(&self, elements: &Rc<Vec<Element>>) -> Result<(), SiteError> {
        let readiness = match self.document.ready_state().as_str() {
            "loading" => Readiness::Loading,
            "interactive" => Readiness::Interactive,
            _ => Readiness::Complete,
        };
        let triggers = readiness.sweep_triggers();

        if triggers.dom_content_loaded {
            let window = self.window.clone();
            let elements = Rc::clone(elements);
            dom::listen(&self.document, "DOMContentLoaded", move |_| {
                schedule_sweep(&window, &elements);
            })?;
        }
        if triggers.load {
            let window = self.window.clone();
            let elements = Rc::clone(elements);
            dom::listen(&self.window, "load", move |_| schedule_sweep(&window, &elements))?;
        }
        if triggers.now {
            schedule_sweep(&self.window, elements);
        }
        Ok(())
    }
}

/// One intersection observer serving a [`RevealGroup`].
struct GroupObserver {
    observer: IntersectionObserver,
}

impl GroupObserver {
    fn new(group: RevealGroup) -> Result<Self, SiteError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        reveal(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        if let Some(margin) = group.geometry.root_margin {
            options.set_root_margin(margin);
        }
        options.set_threshold(&JsValue::from_f64(group.geometry.threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();
        Ok(Self { observer })
    }

    /// Elements revealed by an earlier sweep are never observed.
    fn observe(&self, el: &Element) {
        if state_of(el) == RevealState::Hidden {
            self.observer.observe(el);
        }
    }
}

/// Hidden → visible. A visible element is left untouched.
pub fn reveal(el: &Element) {
    let mut state = state_of(el);
    if state.reveal() {
        dom::remove_class(el, CLASS_IS_HIDDEN);
        dom::add_class(el, CLASS_IS_VISIBLE);
    }
}

fn state_of(el: &Element) -> RevealState {
    RevealState::from_visible(dom::has_class(el, CLASS_IS_VISIBLE))
}

fn role_of(el: &Element) -> RevealRole {
    RevealRole::classify(dom::has_class(el, CLASS_CARD), dom::has_class(el, CLASS_TEAM_MEMBER))
}

/// Two animation frames and a short settle, then sweep.
fn schedule_sweep(window: &Window, elements: &Rc<Vec<Element>>) {
    let outer_window = window.clone();
    let elements = Rc::clone(elements);
    dom::next_frame(window, move || {
        let inner_window = outer_window.clone();
        dom::next_frame(&outer_window, move || {
            Timeout::new(REVEAL_SETTLE_MS, move || sweep(&inner_window, &elements)).forget();
        })
        .absorb("schedule reveal sweep");
    })
    .absorb("schedule reveal sweep");
}

fn sweep(window: &Window, elements: &[Element]) {
    let viewport_width = dom::viewport_width(window);
    let viewport_height = dom::viewport_height(window);
    let candidates = elements.iter().map(|el| (bounds_of(el), state_of(el)));

    for scheduled in plan_initial_sweep(candidates, viewport_width, viewport_height) {
        let Some(el) = elements.get(scheduled.index).cloned() else {
            continue;
        };
        Timeout::new(scheduled.delay_ms, move || reveal(&el)).forget();
    }
}

fn bounds_of(el: &Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds { top: rect.top(), bottom: rect.bottom(), left: rect.left(), right: rect.right() }
}

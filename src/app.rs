//! Startup composition.
//!
//! Builds the shared preference store once, then attaches each behavior
//! component in turn. A component that fails to attach is logged and skipped;
//! the rest of the page keeps working.

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::SiteError;
use crate::floating_nav::controller::FloatingNav;
use crate::hover::HoverSwap;
use crate::nav::controller::NavController;
use crate::reveal::animator::RevealAnimator;
use crate::scroll::controller::ScrollEffects;
use crate::theme::ThemePreference;
use crate::theme::controller::ThemeController;
use crate::theme::store::LocalStorageStore;

/// Install logging and attach every component.
pub fn start() -> Result<(), SiteError> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let config = SiteConfig::load(&document);

    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::warn!("keeping existing logger: {err}");
    }

    let preference = Rc::new(ThemePreference::new(LocalStorageStore::new(config.storage_key.clone())));

    report(
        "theme",
        ThemeController::new(window.clone(), document.clone(), Rc::clone(&preference), &config)
            .attach(),
    );
    report("nav", NavController::new(window.clone(), document.clone()).attach());
    report("scroll", ScrollEffects::new(window.clone(), document.clone(), &config).attach());
    report(
        "hover",
        HoverSwap::new(window.clone(), document.clone(), Rc::clone(&preference), &config).attach(),
    );
    report("reveal", RevealAnimator::new(window.clone(), document.clone()).attach());
    report("floating nav", FloatingNav::new(window, &document).and_then(FloatingNav::attach));

    log::info!("site behavior ready");
    Ok(())
}

fn report(component: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::warn!("{component} disabled: {err}");
    }
}

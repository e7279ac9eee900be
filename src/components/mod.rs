//! DOM wiring for each page behaviour.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component mounts independently against the static page. A component
//! whose hooks are missing is skipped with a debug line; the rest still
//! mount. Browser-only.

pub mod filter_bar;
pub mod hero_typing;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll_effects;
pub mod skill_bars;
pub mod theme_toggle;

use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::MountError;

/// Mount every component. Never fails as a whole.
pub fn mount_all(document: &Document, config: &SiteConfig) {
    report("theme toggle", theme_toggle::mount(document, config));
    report("navigation", nav::mount(document));
    report("scroll effects", scroll_effects::mount(document, config));
    report("project filter", filter_bar::mount(document));
    report("hero typing", hero_typing::mount(document, config));
    report("scroll reveal", reveal::mount(document, config));
    report("skill bars", skill_bars::mount(document, config));
    report("page", page::mount(document));
    report("project modal", crate::modal::dom::mount(document, config.dialog_timings()));
}

fn report(component: &str, result: Result<(), MountError>) {
    match result {
        Ok(()) => log::debug!("{component} mounted"),
        Err(err) => log::debug!("{component} not mounted: {err}"),
    }
}

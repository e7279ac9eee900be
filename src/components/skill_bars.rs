//! Skill bars grow from zero the first time the skills section is mostly
//! visible.

use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::MountError;
use crate::util::dom::{html_element_by_id, observe_intersections, query_all, set_style};
use crate::util::reveal::{SKILL_PROGRESS_SELECTOR, SKILL_RESET_WIDTH, SKILLS_SECTION_ID, observer_threshold};

/// Collapse every bar, then restore its inline width after `delay_ms` so the
/// stylesheet transition replays.
fn replay_skill_bars(document: &Document, delay_ms: u32) {
    let bars = match query_all(document, SKILL_PROGRESS_SELECTOR) {
        Ok(bars) => bars,
        Err(err) => {
            log::warn!("skill bars unavailable: {err}");
            return;
        }
    };
    for bar in bars {
        let width = bar.style().get_property_value("width").unwrap_or_default();
        set_style(&bar, "width", SKILL_RESET_WIDTH);
        Timeout::new(delay_ms, move || set_style(&bar, "width", &width)).forget();
    }
}

pub fn mount(document: &Document, config: &SiteConfig) -> Result<(), MountError> {
    let section = html_element_by_id(document, SKILLS_SECTION_ID)?;
    let doc = document.clone();
    let delay_ms = config.skill_bar_delay_ms;
    observe_intersections(
        std::slice::from_ref(&section),
        observer_threshold(config.skills_threshold),
        None,
        move |element, observer| {
            observer.unobserve(&element);
            replay_skill_bars(&doc, delay_ms);
        },
    )?;
    Ok(())
}

//! Project filter bar (All / Web / Discord / Tools).

use web_sys::Document;

use crate::error::MountError;
use crate::util::dom::{event_element, listen, query, query_all, set_style};
use crate::util::filter::FilterKey;

const FILTER_BAR_SELECTOR: &str = ".filter-bar";
const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
const CARD_SELECTOR: &str = "#projects .project-card, #discord .project-card";
const ACTIVE_CLASS: &str = "active";

fn apply_filter(document: &Document, key: &FilterKey) -> Result<(), MountError> {
    for card in query_all(document, CARD_SELECTOR)? {
        let shown = key.matches(card.get_attribute("data-category").as_deref());
        set_style(&card, "display", if shown { "" } else { "none" });
    }
    Ok(())
}

pub fn mount(document: &Document) -> Result<(), MountError> {
    let bar = query(document, FILTER_BAR_SELECTOR)?;
    let doc = document.clone();
    listen(&bar, "click", move |event| {
        let Some(button) = event_element(&event).and_then(|el| el.closest(FILTER_BUTTON_SELECTOR).ok().flatten())
        else {
            return;
        };
        event.prevent_default();
        let key = FilterKey::parse(button.get_attribute("data-filter").as_deref());
        if let Ok(buttons) = query_all(&doc, FILTER_BUTTON_SELECTOR) {
            for other in buttons {
                let _ = other.class_list().remove_1(ACTIVE_CLASS);
            }
        }
        let _ = button.class_list().add_1(ACTIVE_CLASS);
        if let Err(err) = apply_filter(&doc, &key) {
            log::warn!("project filter failed: {err}");
        }
    })?;
    apply_filter(document, &FilterKey::All)
}

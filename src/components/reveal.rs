//! Fade-up reveal of cards and list items as they scroll into view.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::error::MountError;
use crate::util::dom::{observe_intersections, query_all, set_style};
use crate::util::reveal::{REVEAL_SELECTOR, REVEAL_TRANSITION, SHOWN_TRANSFORM, hidden_transform, observer_threshold};

pub fn mount(document: &Document, config: &SiteConfig) -> Result<(), MountError> {
    let targets = query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Err(MountError::MissingSelector(REVEAL_SELECTOR.to_owned()));
    }

    let hidden = hidden_transform(config.reveal_offset_px);
    for target in &targets {
        set_style(target, "opacity", "0");
        set_style(target, "transform", &hidden);
        set_style(target, "transition", REVEAL_TRANSITION);
    }

    observe_intersections(
        &targets,
        observer_threshold(config.reveal_threshold),
        Some(&config.reveal_root_margin),
        |element, observer| {
            observer.unobserve(&element);
            if let Ok(element) = element.dyn_into::<HtmlElement>() {
                set_style(&element, "opacity", "1");
                set_style(&element, "transform", SHOWN_TRANSFORM);
            }
        },
    )?;
    Ok(())
}

//! Typewriter replay of the hero title.

use gloo_timers::callback::Timeout;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::error::MountError;
use crate::util::dom::query;
use crate::util::typing::TypingEffect;

const HERO_TITLE_SELECTOR: &str = ".hero-title";

fn type_next(title: HtmlElement, mut effect: TypingEffect, speed_ms: u32) {
    let Some(frame) = effect.next() else {
        return;
    };
    title.set_text_content(Some(&frame));
    if effect.is_done() {
        return;
    }
    Timeout::new(speed_ms, move || type_next(title, effect, speed_ms)).forget();
}

pub fn mount(document: &Document, config: &SiteConfig) -> Result<(), MountError> {
    let title = query(document, HERO_TITLE_SELECTOR)?;
    let text = title.text_content().unwrap_or_default();
    let speed_ms = config.typing_speed_ms;
    Timeout::new(config.typing_start_delay_ms, move || {
        title.set_text_content(None);
        type_next(title, TypingEffect::new(text), speed_ms);
    })
    .forget();
    Ok(())
}

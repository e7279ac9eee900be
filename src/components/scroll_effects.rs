//! Scroll-driven chrome: navbar styling, progress bar, hero parallax,
//! scroll-to-top button, and smooth in-page anchors.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::error::MountError;
use crate::util::dom::{html_element_by_id, listen, query, query_all, set_style, window};
use crate::util::scroll::{
    anchor_id, anchor_target_top, navbar_scrolled, parallax_offset, scroll_progress_percent, scroll_to_top_visible,
};

pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const SCROLL_TO_TOP_ID: &str = "scrollToTop";
const NAVBAR_SELECTOR: &str = ".navbar";
const HERO_SELECTOR: &str = ".hero";
const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

#[derive(Clone)]
struct ScrollTargets {
    navbar: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    to_top: Option<HtmlElement>,
    navbar_threshold: f64,
    to_top_threshold: f64,
    parallax_rate: f64,
}

impl ScrollTargets {
    fn update(&self, window: &Window, document: &Document) {
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        if let Some(navbar) = &self.navbar {
            let _ = navbar
                .class_list()
                .toggle_with_force("scrolled", navbar_scrolled(scroll_y, self.navbar_threshold));
        }
        if let Some(to_top) = &self.to_top {
            let _ = to_top
                .class_list()
                .toggle_with_force("show", scroll_to_top_visible(scroll_y, self.to_top_threshold));
        }
        if let Some(hero) = &self.hero {
            let offset = parallax_offset(scroll_y, self.parallax_rate);
            set_style(hero, "transform", &format!("translateY({offset}px)"));
        }
        self.update_progress(document);
    }

    fn update_progress(&self, document: &Document) {
        let (Some(progress), Some(root)) = (&self.progress, document.document_element()) else {
            return;
        };
        let percent = scroll_progress_percent(
            f64::from(root.scroll_top()),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        );
        set_style(progress, "width", &format!("{percent}%"));
    }
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn mount(document: &Document, config: &SiteConfig) -> Result<(), MountError> {
    let window = window()?;
    let targets = ScrollTargets {
        navbar: query(document, NAVBAR_SELECTOR).ok(),
        progress: html_element_by_id(document, SCROLL_PROGRESS_ID).ok(),
        hero: query(document, HERO_SELECTOR).ok(),
        to_top: html_element_by_id(document, SCROLL_TO_TOP_ID).ok(),
        navbar_threshold: config.navbar_scrolled_threshold_px,
        to_top_threshold: config.scroll_top_threshold_px,
        parallax_rate: config.parallax_rate,
    };

    {
        let targets = targets.clone();
        let (win, doc) = (window.clone(), document.clone());
        listen(&window, "scroll", move |_| targets.update(&win, &doc))?;
    }
    if targets.progress.is_some() {
        targets.update_progress(document);
        let targets = targets.clone();
        let doc = document.clone();
        listen(&window, "resize", move |_| targets.update_progress(&doc))?;
    }

    if let Some(to_top) = &targets.to_top {
        let win = window.clone();
        listen(to_top, "click", move |_| smooth_scroll_to(&win, 0.0))?;
    }

    let nav_offset = config.nav_offset_px;
    for anchor in query_all(document, ANCHOR_SELECTOR)? {
        let (win, doc, link) = (window.clone(), document.clone(), anchor.clone());
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let target = anchor_id(&href)
                .and_then(|id| doc.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                smooth_scroll_to(&win, anchor_target_top(f64::from(target.offset_top()), nav_offset));
            }
        })?;
    }
    Ok(())
}

//! Scroll-position math for the navbar, progress bar, parallax hero and
//! scroll-to-top button. Pure; the listeners live in
//! `components::scroll_effects`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// How far down the document the viewport is, as a 0..=100 percentage.
/// A document that cannot scroll reports 0.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn scroll_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Vertical translation for the hero at `scroll_y`.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// Scroll destination for an in-page anchor, leaving room for the fixed
/// navbar.
pub fn anchor_target_top(offset_top: f64, nav_offset: f64) -> f64 {
    offset_top - nav_offset
}

/// In-page anchor target id from an `href`, e.g. `#about` -> `about`.
/// A bare `#` has no target.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

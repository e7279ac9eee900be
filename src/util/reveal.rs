//! Styles for the visibility-triggered animations: the fade-up reveal of
//! cards and list items, and the skill-bar replay. Observers live in
//! `components::reveal` and `components::skill_bars`.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str = ".skill-item, .project-card, .stat-item, .contact-item";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

pub const SKILLS_SECTION_ID: &str = "skills";
pub const SKILL_PROGRESS_SELECTOR: &str = ".skill-progress";
/// Width a bar collapses to before replaying to its authored width.
pub const SKILL_RESET_WIDTH: &str = "0%";

/// Transform for an element waiting to be revealed.
pub fn hidden_transform(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

/// `IntersectionObserver` throws on thresholds outside `0..=1`.
pub fn observer_threshold(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

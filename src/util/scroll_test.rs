use super::*;

// =============================================================
// Progress bar
// =============================================================

#[test]
fn progress_is_zero_at_top_and_full_at_bottom() {
    assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(500.0, 3000.0, 1000.0), 25.0);
}

#[test]
fn progress_is_zero_when_document_fits_viewport() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(scroll_progress_percent(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(2100.0, 3000.0, 1000.0), 100.0);
}

// =============================================================
// Thresholds
// =============================================================

#[test]
fn navbar_threshold_is_strict() {
    assert!(!navbar_scrolled(50.0, 50.0));
    assert!(navbar_scrolled(50.5, 50.0));
}

#[test]
fn scroll_to_top_threshold_is_strict() {
    assert!(!scroll_to_top_visible(300.0, 300.0));
    assert!(scroll_to_top_visible(301.0, 300.0));
}

// =============================================================
// Offsets
// =============================================================

#[test]
fn parallax_moves_against_scroll() {
    assert_eq!(parallax_offset(200.0, -0.5), -100.0);
    assert_eq!(parallax_offset(0.0, -0.5), 0.0);
}

#[test]
fn anchor_target_accounts_for_navbar() {
    assert_eq!(anchor_target_top(970.0, 70.0), 900.0);
}

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("about"), None);
}

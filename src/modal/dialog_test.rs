use super::*;
use crate::modal::test_host::FakeHost;

fn opened(host: &mut FakeHost) -> DialogController {
    let mut dialog = DialogController::default();
    let step = dialog.open(host).expect("open from closed schedules reveal");
    assert!(dialog.complete(host, step));
    dialog
}

// =============================================================
// Opening
// =============================================================

#[test]
fn starts_closed() {
    assert_eq!(DialogController::default().state(), DialogState::Closed);
}

#[test]
fn open_shows_root_and_locks_scroll_before_reveal() {
    let mut host = FakeHost::with_body_overflow("auto");
    let mut dialog = DialogController::default();

    let step = dialog.open(&mut host).unwrap();
    assert_eq!(step.step, Step::Reveal);
    assert_eq!(step.delay_ms, DEFAULT_OPEN_DELAY_MS);
    assert_eq!(dialog.state(), DialogState::Opening);
    assert!(host.root_visible);
    assert!(!host.open_class);
    assert_eq!(host.body_overflow, "hidden");

    assert!(dialog.complete(&mut host, step));
    assert_eq!(dialog.state(), DialogState::Open);
    assert!(host.open_class);
}

#[test]
fn open_while_open_is_noop() {
    let mut host = FakeHost::default();
    let mut dialog = opened(&mut host);
    assert_eq!(dialog.open(&mut host), None);
    assert_eq!(dialog.state(), DialogState::Open);
    assert!(host.root_visible);
    assert!(host.open_class);
}

#[test]
fn custom_timings_flow_into_steps() {
    let mut host = FakeHost::default();
    let mut dialog = DialogController::new(DialogTimings { open_delay_ms: 16, close_animation_ms: 350 });
    let reveal = dialog.open(&mut host).unwrap();
    assert_eq!(reveal.delay_ms, 16);
    dialog.complete(&mut host, reveal);
    let hide = dialog.close(&mut host).unwrap();
    assert_eq!(hide.delay_ms, 350);
}

// =============================================================
// Closing
// =============================================================

#[test]
fn close_removes_class_then_hides_and_restores_scroll() {
    let mut host = FakeHost::with_body_overflow("scroll");
    let mut dialog = opened(&mut host);

    let step = dialog.close(&mut host).unwrap();
    assert_eq!(step.step, Step::Hide);
    assert_eq!(step.delay_ms, DEFAULT_CLOSE_ANIMATION_MS);
    assert_eq!(dialog.state(), DialogState::Closing);
    assert!(!host.open_class);
    assert!(host.root_visible);
    assert_eq!(host.body_overflow, "hidden");

    assert!(dialog.complete(&mut host, step));
    assert_eq!(dialog.state(), DialogState::Closed);
    assert!(!host.root_visible);
    assert_eq!(host.body_overflow, "scroll");
    assert_eq!(host.focus_releases, 1);
}

#[test]
fn close_while_closed_is_noop() {
    let mut host = FakeHost::default();
    let mut dialog = DialogController::default();
    assert_eq!(dialog.close(&mut host), None);
    assert_eq!(dialog.state(), DialogState::Closed);
}

#[test]
fn close_while_closing_is_noop() {
    let mut host = FakeHost::default();
    let mut dialog = opened(&mut host);
    let first = dialog.close(&mut host).unwrap();
    assert_eq!(dialog.close(&mut host), None);
    assert!(dialog.complete(&mut host, first));
    assert_eq!(dialog.state(), DialogState::Closed);
}

#[test]
fn close_during_opening_reverses() {
    let mut host = FakeHost::default();
    let mut dialog = DialogController::default();
    let reveal = dialog.open(&mut host).unwrap();
    let hide = dialog.close(&mut host).unwrap();

    assert!(!dialog.complete(&mut host, reveal));
    assert!(!host.open_class);
    assert!(dialog.complete(&mut host, hide));
    assert_eq!(dialog.state(), DialogState::Closed);
}

// =============================================================
// Superseded timers
// =============================================================

#[test]
fn reopen_during_closing_cancels_pending_hide() {
    let mut host = FakeHost::with_body_overflow("visible");
    let mut dialog = opened(&mut host);
    let hide = dialog.close(&mut host).unwrap();
    let reveal = dialog.open(&mut host).unwrap();
    assert_eq!(dialog.state(), DialogState::Opening);

    assert!(!dialog.complete(&mut host, hide));
    assert!(host.root_visible);
    assert_eq!(host.body_overflow, "hidden");

    assert!(dialog.complete(&mut host, reveal));
    assert_eq!(dialog.state(), DialogState::Open);
    assert!(host.open_class);
}

#[test]
fn reopen_keeps_original_overflow_for_restore() {
    let mut host = FakeHost::with_body_overflow("visible");
    let mut dialog = opened(&mut host);
    dialog.close(&mut host).unwrap();
    let reveal = dialog.open(&mut host).unwrap();
    dialog.complete(&mut host, reveal);

    let hide = dialog.close(&mut host).unwrap();
    dialog.complete(&mut host, hide);
    assert_eq!(host.body_overflow, "visible");
}

#[test]
fn completing_a_step_twice_is_ignored() {
    let mut host = FakeHost::default();
    let mut dialog = DialogController::default();
    let reveal = dialog.open(&mut host).unwrap();
    assert!(dialog.complete(&mut host, reveal));
    assert!(!dialog.complete(&mut host, reveal));
}

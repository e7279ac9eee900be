//! Open/closed state machine for the single reused dialog.
//!
//! DESIGN
//! ======
//! `open` and `close` perform the immediate half of a transition and hand back
//! a `ScheduledStep` for the delayed half (adding the `open` class, hiding the
//! root). The caller runs the step after `delay_ms` through `complete`.
//! Every transition bumps an epoch, so a step scheduled by a superseded
//! transition is ignored when it fires.
//!
//! Body scroll is locked from the first `open` until a `close` fully
//! completes; the pre-open `overflow` value is restored at that point.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use super::host::ModalHost;

pub const DEFAULT_OPEN_DELAY_MS: u32 = 10;
pub const DEFAULT_CLOSE_ANIMATION_MS: u32 = 200;

const SCROLL_LOCK_OVERFLOW: &str = "hidden";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Delayed half of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Add the `open` class so the enter transition fires.
    Reveal,
    /// Hide the root once the exit transition has played.
    Hide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    pub step: Step,
    pub epoch: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogTimings {
    pub open_delay_ms: u32,
    pub close_animation_ms: u32,
}

impl Default for DialogTimings {
    fn default() -> Self {
        Self { open_delay_ms: DEFAULT_OPEN_DELAY_MS, close_animation_ms: DEFAULT_CLOSE_ANIMATION_MS }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DialogController {
    state: DialogState,
    epoch: u64,
    /// Body overflow captured when the scroll lock was taken.
    saved_overflow: Option<String>,
    timings: DialogTimings,
}

impl DialogController {
    pub fn new(timings: DialogTimings) -> Self {
        Self { timings, ..Self::default() }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Begin `Closed | Closing | Opening -> Opening`. Already `Open` is a no-op
    /// (the caller has re-rendered; the dialog stays up).
    pub fn open<H: ModalHost>(&mut self, host: &mut H) -> Option<ScheduledStep> {
        if self.state == DialogState::Open {
            return None;
        }
        host.set_root_visible(true);
        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(host.body_overflow());
        }
        host.set_body_overflow(SCROLL_LOCK_OVERFLOW);
        self.state = DialogState::Opening;
        Some(self.schedule(Step::Reveal, self.timings.open_delay_ms))
    }

    /// Begin `Opening | Open -> Closing`. No-op when already closed or closing.
    pub fn close<H: ModalHost>(&mut self, host: &mut H) -> Option<ScheduledStep> {
        if matches!(self.state, DialogState::Closed | DialogState::Closing) {
            return None;
        }
        host.set_open_class(false);
        self.state = DialogState::Closing;
        Some(self.schedule(Step::Hide, self.timings.close_animation_ms))
    }

    /// Run the delayed half of a transition. Returns `false` for a stale step.
    pub fn complete<H: ModalHost>(&mut self, host: &mut H, scheduled: ScheduledStep) -> bool {
        if scheduled.epoch != self.epoch {
            log::trace!("dropping stale {:?} (epoch {} != {})", scheduled.step, scheduled.epoch, self.epoch);
            return false;
        }
        match (scheduled.step, self.state) {
            (Step::Reveal, DialogState::Opening) => {
                host.set_open_class(true);
                self.state = DialogState::Open;
                true
            }
            (Step::Hide, DialogState::Closing) => {
                host.set_root_visible(false);
                let overflow = self.saved_overflow.take().unwrap_or_default();
                host.set_body_overflow(&overflow);
                host.release_focus();
                self.state = DialogState::Closed;
                true
            }
            _ => false,
        }
    }

    fn schedule(&mut self, step: Step, delay_ms: u32) -> ScheduledStep {
        self.epoch += 1;
        ScheduledStep { step, epoch: self.epoch, delay_ms }
    }
}

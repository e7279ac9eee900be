//! Decode, render and open pipeline for the project detail dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser listeners translate DOM events into calls on `ProjectModal` and
//! run whatever `ScheduledStep` comes back on a timer. The type itself owns
//! no timers, which keeps every transition testable without a browser.

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use super::dialog::{DialogController, DialogState, DialogTimings, ScheduledStep};
use super::host::ModalHost;
use super::labels::Language;
use super::record::ProjectRecord;
use super::render::{ModalContent, render};

pub const ESCAPE_KEY: &str = "Escape";

/// Why the dialog is being dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Debug)]
pub struct ProjectModal<H> {
    host: H,
    dialog: DialogController,
}

impl<H: ModalHost> ProjectModal<H> {
    pub fn new(host: H, timings: DialogTimings) -> Self {
        Self { host, dialog: DialogController::new(timings) }
    }

    pub fn state(&self) -> DialogState {
        self.dialog.state()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Replace the dialog content with `record` and open it.
    ///
    /// Content is fully written before the open transition starts.
    pub fn show(&mut self, record: &ProjectRecord, language: Language) -> Option<ScheduledStep> {
        log::debug!("showing project {:?}", record.title);
        render(&mut self.host, &ModalContent::from_record(record, language));
        self.dialog.open(&mut self.host)
    }

    pub fn dismiss(&mut self, reason: Dismissal) -> Option<ScheduledStep> {
        let step = self.dialog.close(&mut self.host);
        if step.is_some() {
            log::debug!("dialog dismissed via {reason:?}");
        }
        step
    }

    /// Click landing on the dialog root. Only a click whose target is the
    /// root itself (the backdrop) dismisses; clicks inside the content don't.
    pub fn root_clicked(&mut self, target_is_root: bool) -> Option<ScheduledStep> {
        if !target_is_root {
            return None;
        }
        self.dismiss(Dismissal::Backdrop)
    }

    pub fn key_pressed(&mut self, key: &str) -> Option<ScheduledStep> {
        if key != ESCAPE_KEY || self.state() == DialogState::Closed {
            return None;
        }
        self.dismiss(Dismissal::Escape)
    }

    /// Run a step previously returned by this modal.
    pub fn complete(&mut self, step: ScheduledStep) -> bool {
        self.dialog.complete(&mut self.host, step)
    }
}

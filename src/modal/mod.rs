//! Project detail dialog driven by `data-*` attributes on trigger elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! click -> `router` finds the trigger -> `record` decodes it -> `render`
//! writes it through a `host::ModalHost` -> `dialog` runs the open/close
//! transition. `project_modal` ties the pipeline together; `dom` (browser
//! feature) supplies the real host and listeners.

#[cfg(feature = "browser")]
pub mod dom;

pub mod dialog;
pub mod host;
pub mod labels;
pub mod project_modal;
pub mod record;
pub mod render;
pub mod router;

#[cfg(test)]
mod test_host;

pub use dialog::{DialogState, DialogTimings};
pub use labels::Language;
pub use project_modal::{Dismissal, ProjectModal};
pub use record::ProjectRecord;

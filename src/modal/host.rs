//! The DOM seam shared by the renderer and the dialog controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DomModal` (browser feature) implements this over the real document; unit
//! tests implement it over plain fields. Nothing above this trait touches
//! web-sys, so the whole open/render/close pipeline runs natively in tests.

/// Plain-text slots in the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Title,
    Description,
}

/// Optional sections, each a wrapper element plus a content container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Tech,
    Stats,
}

pub trait ModalHost {
    /// Replace a slot's text content (never parsed as markup).
    fn set_text(&mut self, slot: TextSlot, text: &str);

    /// Empty a section's content container. Returns `false` when the
    /// container hook is absent from the page.
    fn clear_section(&mut self, section: Section) -> bool;

    fn append_feature(&mut self, text: &str);
    fn append_tech_tag(&mut self, text: &str);
    fn append_stat(&mut self, value: &str, label: &str);

    fn set_section_visible(&mut self, section: Section, visible: bool);

    /// Show or hide the dialog root.
    fn set_root_visible(&mut self, visible: bool);

    /// Add or remove the class that drives the enter/exit transition.
    fn set_open_class(&mut self, present: bool);

    /// Current inline `overflow` of the document body.
    fn body_overflow(&self) -> String;
    fn set_body_overflow(&mut self, value: &str);

    /// Hand focus back after the dialog closes.
    fn release_focus(&mut self) {}
}

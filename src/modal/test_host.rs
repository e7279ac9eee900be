//! In-memory `ModalHost` used by the modal unit tests.

use std::collections::{HashMap, HashSet};

use super::host::{ModalHost, Section, TextSlot};

#[derive(Debug, Default)]
pub struct FakeHost {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub stats: Vec<(String, String)>,
    pub visibility: HashMap<Section, bool>,
    /// Sections whose content container is absent from the page.
    pub missing: HashSet<Section>,
    pub root_visible: bool,
    pub open_class: bool,
    pub body_overflow: String,
    pub focus_releases: usize,
}

impl FakeHost {
    pub fn with_body_overflow(value: &str) -> Self {
        Self { body_overflow: value.to_owned(), ..Self::default() }
    }

    pub fn section_visible(&self, section: Section) -> bool {
        self.visibility.get(&section).copied().unwrap_or(true)
    }
}

impl ModalHost for FakeHost {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        match slot {
            TextSlot::Title => self.title = text.to_owned(),
            TextSlot::Description => self.description = text.to_owned(),
        }
    }

    fn clear_section(&mut self, section: Section) -> bool {
        if self.missing.contains(&section) {
            return false;
        }
        match section {
            Section::Features => self.features.clear(),
            Section::Tech => self.tech.clear(),
            Section::Stats => self.stats.clear(),
        }
        true
    }

    fn append_feature(&mut self, text: &str) {
        self.features.push(text.to_owned());
    }

    fn append_tech_tag(&mut self, text: &str) {
        self.tech.push(text.to_owned());
    }

    fn append_stat(&mut self, value: &str, label: &str) {
        self.stats.push((value.to_owned(), label.to_owned()));
    }

    fn set_section_visible(&mut self, section: Section, visible: bool) {
        self.visibility.insert(section, visible);
    }

    fn set_root_visible(&mut self, visible: bool) {
        self.root_visible = visible;
    }

    fn set_open_class(&mut self, present: bool) {
        self.open_class = present;
    }

    fn body_overflow(&self) -> String {
        self.body_overflow.clone()
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.body_overflow = value.to_owned();
    }

    fn release_focus(&mut self) {
        self.focus_releases += 1;
    }
}

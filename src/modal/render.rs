//! Project record to dialog content.
//!
//! Rendering is split in two: `ModalContent::from_record` resolves display
//! strings and labels, `render` writes them through a `ModalHost`. Every call
//! clears the section containers first, so nothing from a previous record
//! survives a re-open.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::host::{ModalHost, Section, TextSlot};
use super::labels::Language;
use super::record::{ProjectRecord, display_text};

/// One cell of the stats grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCell {
    pub value: String,
    pub label: String,
}

/// Display-ready dialog content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub stats: Vec<StatCell>,
}

impl ModalContent {
    pub fn from_record(record: &ProjectRecord, language: Language) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            features: record.features.iter().map(display_text).collect(),
            tech: record.tech.iter().map(display_text).collect(),
            stats: record
                .stats
                .iter()
                .map(|(key, value)| StatCell { value: display_text(value), label: language.stat_label(key).to_owned() })
                .collect(),
        }
    }
}

/// Write `content` into the dialog, replacing whatever was there.
pub fn render<H: ModalHost>(host: &mut H, content: &ModalContent) {
    host.set_text(TextSlot::Title, &content.title);
    host.set_text(TextSlot::Description, &content.description);
    fill_section(host, Section::Features, &content.features, |host, item| host.append_feature(item));
    fill_section(host, Section::Tech, &content.tech, |host, item| host.append_tech_tag(item));
    fill_section(host, Section::Stats, &content.stats, |host, cell| {
        host.append_stat(&cell.value, &cell.label);
    });
}

fn fill_section<H, T>(host: &mut H, section: Section, items: &[T], mut append: impl FnMut(&mut H, &T))
where
    H: ModalHost,
{
    if !host.clear_section(section) {
        log::debug!("{section:?} container missing; section skipped");
        host.set_section_visible(section, false);
        return;
    }
    for item in items {
        append(host, item);
    }
    host.set_section_visible(section, !items.is_empty());
}

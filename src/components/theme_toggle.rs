//! Theme toggle button with persisted preference.

use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::MountError;
use crate::util::dom::{html_element_by_id, listen};
use crate::util::theme::{self, LANGUAGE_STORAGE_KEY};

pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Apply the saved theme, remember the page language, then wire the toggle.
/// The saved theme is applied even when the button is missing.
pub fn mount(document: &Document, config: &SiteConfig) -> Result<(), MountError> {
    let fallback = config.default_theme;
    theme::apply(theme::read_preference(&config.theme_storage_key, fallback));

    if let Some(lang) = document.document_element().and_then(|root| root.get_attribute("lang")) {
        theme::persist(LANGUAGE_STORAGE_KEY, &lang);
    }

    let button = html_element_by_id(document, THEME_TOGGLE_ID)?;
    let storage_key = config.theme_storage_key.clone();
    listen(&button, "click", move |_| {
        let next = theme::toggle(theme::applied(fallback), &storage_key);
        log::debug!("theme switched to {}", next.as_str());
    })
}

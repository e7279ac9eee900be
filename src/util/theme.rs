//! Theme selection and persistence.
//!
//! Reads the visitor's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element plus the matching icon
//! class on `#themeIcon`. Toggle writes back to `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage can be disabled (private mode, file
//! URLs) and every failure silently falls back to the configured default.
//! Without the `browser` feature everything here is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_ICON_ID: &str = "themeIcon";
pub const LANGUAGE_STORAGE_KEY: &str = "preferredLanguage";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or attribute value; anything unrecognized is `fallback`.
    pub fn parse(raw: Option<&str>, fallback: Self) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => fallback,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }
}

/// Read the saved theme, or `fallback` when nothing usable is stored.
pub fn read_preference(storage_key: &str, fallback: Theme) -> Theme {
    #[cfg(feature = "browser")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(storage_key).ok().flatten());
        Theme::parse(stored.as_deref(), fallback)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = storage_key;
        fallback
    }
}

/// Theme currently applied to the `<html>` element.
pub fn applied(fallback: Theme) -> Theme {
    #[cfg(feature = "browser")]
    {
        let current = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute(THEME_ATTRIBUTE));
        Theme::parse(current.as_deref(), fallback)
    }
    #[cfg(not(feature = "browser"))]
    {
        fallback
    }
}

/// Apply `theme` to the document and the toggle icon.
pub fn apply(theme: Theme) {
    #[cfg(feature = "browser")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
            if let Some(icon) = doc.get_element_by_id(THEME_ICON_ID) {
                icon.set_class_name(theme.icon_class());
            }
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = theme;
    }
}

/// Best-effort write to `localStorage`.
pub fn persist(storage_key: &str, value: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(storage_key, value).is_err() {
                log::debug!("localStorage unavailable; {storage_key} not saved");
            }
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (storage_key, value);
    }
}

/// Flip `current`, apply it, and persist the new preference.
pub fn toggle(current: Theme, storage_key: &str) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(storage_key, next.as_str());
    next
}

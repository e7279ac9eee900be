//! Stat label tables keyed by document language.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

/// Label table selector. Only Arabic is distinguished; every other document
/// language gets the English table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

/// `(key, english, arabic)` for every recognized stat key.
const STAT_LABELS: &[(&str, &str, &str)] = &[
    ("servers", "Servers", "سيرفرات"),
    ("users", "Users", "مستخدمين"),
    ("uptime", "Uptime", "وقت التشغيل"),
    ("tickets", "Tickets", "تذاكر"),
    ("commands", "Commands", "أوامر"),
    ("tournaments", "Tournaments", "بطولات"),
    ("participants", "Participants", "مشاركين"),
    ("transactions", "Transactions", "معاملات"),
    ("songs", "Songs", "أغاني"),
];

impl Language {
    /// Select a table from the root element's `lang` attribute.
    pub fn from_document_lang(lang: Option<&str>) -> Self {
        match lang {
            Some("ar") => Self::Arabic,
            _ => Self::English,
        }
    }

    /// Label for `key`, or the key itself when it is not recognized.
    /// Lookup is exact and case-sensitive.
    pub fn stat_label<'a>(self, key: &'a str) -> &'a str {
        STAT_LABELS
            .iter()
            .find(|(known, _, _)| *known == key)
            .map_or(key, |&(_, english, arabic)| match self {
                Self::English => english,
                Self::Arabic => arabic,
            })
    }
}

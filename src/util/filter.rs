//! Project card filtering (All / Web / Discord / Tools).

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

pub const ALL_KEY: &str = "all";
/// Category assumed for cards without `data-category`.
pub const DEFAULT_CATEGORY: &str = "web";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FilterKey {
    #[default]
    All,
    Category(String),
}

impl FilterKey {
    /// Parse a button's `data-filter`; missing or `all` shows everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some(ALL_KEY) => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    /// Whether a card with `category` (its raw `data-category`) is shown.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category.unwrap_or(DEFAULT_CATEGORY),
        }
    }
}

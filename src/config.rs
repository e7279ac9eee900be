//! Page behaviour tunables, optionally overridden from the page itself.
//!
//! Source: an inline `<script id="site-config" type="application/json">`
//! block. Every key is optional (camelCase); missing keys keep their
//! defaults. A malformed block is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::modal::dialog::{DEFAULT_CLOSE_ANIMATION_MS, DEFAULT_OPEN_DELAY_MS, DialogTimings};
use crate::util::theme::Theme;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_NAV_OFFSET_PX: f64 = 70.0;
pub const DEFAULT_NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const DEFAULT_SCROLL_TOP_PX: f64 = 300.0;
pub const DEFAULT_PARALLAX_RATE: f64 = -0.5;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_REVEAL_OFFSET_PX: f64 = 30.0;
pub const DEFAULT_SKILLS_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SKILL_BAR_DELAY_MS: u32 = 500;
pub const DEFAULT_TYPING_START_DELAY_MS: u32 = 500;
pub const DEFAULT_TYPING_SPEED_MS: u32 = 50;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "preferredTheme";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub modal_open_delay_ms: u32,
    pub modal_close_animation_ms: u32,
    pub nav_offset_px: f64,
    pub navbar_scrolled_threshold_px: f64,
    pub scroll_top_threshold_px: f64,
    pub parallax_rate: f64,
    /// Visible fraction that reveals a card or list item.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_offset_px: f64,
    /// Visible fraction of `#skills` that replays the skill bars.
    pub skills_threshold: f64,
    pub skill_bar_delay_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_speed_ms: u32,
    pub theme_storage_key: String,
    pub default_theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            modal_open_delay_ms: DEFAULT_OPEN_DELAY_MS,
            modal_close_animation_ms: DEFAULT_CLOSE_ANIMATION_MS,
            nav_offset_px: DEFAULT_NAV_OFFSET_PX,
            navbar_scrolled_threshold_px: DEFAULT_NAVBAR_SCROLLED_PX,
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_PX,
            parallax_rate: DEFAULT_PARALLAX_RATE,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            skills_threshold: DEFAULT_SKILLS_THRESHOLD,
            skill_bar_delay_ms: DEFAULT_SKILL_BAR_DELAY_MS,
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
        }
    }
}

impl SiteConfig {
    /// Parse a config object. Anything but a JSON object is rejected, so a
    /// stray array cannot fill fields by position.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let entries: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(serde_json::from_value(Value::Object(entries))?)
    }

    /// Config from the text of the inline block, if any.
    pub fn from_block(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("#{CONFIG_ELEMENT_ID} ignored: {err}");
            Self::default()
        })
    }

    #[cfg(feature = "browser")]
    pub fn load(document: &web_sys::Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_block(raw.as_deref())
    }

    pub fn dialog_timings(&self) -> DialogTimings {
        DialogTimings { open_delay_ms: self.modal_open_delay_ms, close_animation_ms: self.modal_close_animation_ms }
    }
}

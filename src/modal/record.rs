//! Project records decoded from trigger `data-*` attributes.
//!
//! DESIGN
//! ======
//! Triggers are hand-authored markup, so decoding is total: a missing or
//! malformed attribute degrades to an empty value and the dialog simply shows
//! that section as absent. Only the outer shape (array vs. object) is checked;
//! element values pass through untouched.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use std::collections::HashMap;

use serde_json::{Map, Number, Value};

pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_DESCRIPTION: &str = "data-description";
pub const ATTR_FEATURES: &str = "data-features";
pub const ATTR_TECH: &str = "data-tech";
pub const ATTR_STATS: &str = "data-stats";

/// Anything that can answer attribute lookups by name.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(feature = "browser")]
impl AttributeSource for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// One project as carried by a trigger element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub features: Vec<Value>,
    pub tech: Vec<Value>,
    /// Stat key to display value, in authoring order.
    pub stats: Map<String, Value>,
}

impl ProjectRecord {
    /// Decode a record from `source`. Never fails.
    pub fn decode(source: &impl AttributeSource) -> Self {
        Self {
            title: source.attribute(ATTR_TITLE).unwrap_or_default(),
            description: source.attribute(ATTR_DESCRIPTION).unwrap_or_default(),
            features: decode_list(source, ATTR_FEATURES),
            tech: decode_list(source, ATTR_TECH),
            stats: decode_map(source, ATTR_STATS),
        }
    }
}

/// Visible text for a decoded element or stat value.
///
/// Strings render verbatim. Numbers drop a zero fraction (`2.0` shows `2`),
/// arrays join their items with commas (`null` items show empty), and
/// objects render as compact JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { display_text(item) })
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float == 0.0 => "0".to_owned(),
        Some(float) if number.is_f64() && float.is_finite() && float.fract() == 0.0 => format!("{float:.0}"),
        _ => number.to_string(),
    }
}

fn parse_payload(source: &impl AttributeSource, attr: &str) -> Option<Value> {
    let raw = source.attribute(attr)?;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring malformed {attr}: {err}");
            None
        }
    }
}

fn decode_list(source: &impl AttributeSource, attr: &str) -> Vec<Value> {
    match parse_payload(source, attr) {
        Some(Value::Array(items)) => items,
        Some(_) => {
            log::debug!("ignoring {attr}: expected a JSON array");
            Vec::new()
        }
        None => Vec::new(),
    }
}

fn decode_map(source: &impl AttributeSource, attr: &str) -> Map<String, Value> {
    match parse_payload(source, attr) {
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            log::debug!("ignoring {attr}: expected a JSON object");
            Map::new()
        }
        None => Map::new(),
    }
}

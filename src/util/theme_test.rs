#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn parse_recognizes_both_themes() {
    assert_eq!(Theme::parse(Some("dark"), Theme::Light), Theme::Dark);
    assert_eq!(Theme::parse(Some("light"), Theme::Dark), Theme::Light);
}

#[test]
fn parse_falls_back_for_unknown_or_missing() {
    assert_eq!(Theme::parse(Some("sepia"), Theme::Dark), Theme::Dark);
    assert_eq!(Theme::parse(Some("Light"), Theme::Dark), Theme::Dark);
    assert_eq!(Theme::parse(None, Theme::Light), Theme::Light);
}

#[test]
fn toggled_flips_and_icon_follows() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
}

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn read_preference_is_fallback_outside_browser() {
    assert_eq!(read_preference("preferredTheme", Theme::Light), Theme::Light);
    assert_eq!(applied(Theme::Dark), Theme::Dark);
}

#[test]
fn toggle_returns_next_theme() {
    assert_eq!(toggle(Theme::Dark, "preferredTheme"), Theme::Light);
    assert_eq!(toggle(Theme::Light, "preferredTheme"), Theme::Dark);
}

#[test]
fn theme_deserializes_lowercase() {
    let theme: Theme = serde_json::from_str(r#""light""#).unwrap();
    assert_eq!(theme, Theme::Light);
}

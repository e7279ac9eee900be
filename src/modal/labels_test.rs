use super::*;

#[test]
fn arabic_only_for_exact_ar() {
    assert_eq!(Language::from_document_lang(Some("ar")), Language::Arabic);
    assert_eq!(Language::from_document_lang(Some("en")), Language::English);
    assert_eq!(Language::from_document_lang(Some("fr")), Language::English);
    assert_eq!(Language::from_document_lang(Some("")), Language::English);
    assert_eq!(Language::from_document_lang(None), Language::English);
}

#[test]
fn english_labels_for_recognized_keys() {
    assert_eq!(Language::English.stat_label("servers"), "Servers");
    assert_eq!(Language::English.stat_label("users"), "Users");
    assert_eq!(Language::English.stat_label("transactions"), "Transactions");
}

#[test]
fn arabic_labels_for_recognized_keys() {
    assert_eq!(Language::Arabic.stat_label("servers"), "سيرفرات");
    assert_eq!(Language::Arabic.stat_label("users"), "مستخدمين");
    assert_eq!(Language::Arabic.stat_label("uptime"), "وقت التشغيل");
}

#[test]
fn unknown_keys_render_raw() {
    assert_eq!(Language::English.stat_label("stars"), "stars");
    assert_eq!(Language::Arabic.stat_label("stars"), "stars");
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(Language::English.stat_label("Servers"), "Servers");
    assert_eq!(Language::Arabic.stat_label("Servers"), "Servers");
    assert_eq!(Language::English.stat_label("USERS"), "USERS");
}

#[test]
fn every_recognized_key_has_both_labels() {
    for (key, english, arabic) in STAT_LABELS {
        assert_eq!(Language::English.stat_label(key), *english);
        assert_eq!(Language::Arabic.stat_label(key), *arabic);
        assert_ne!(english, arabic);
    }
    assert_eq!(STAT_LABELS.len(), 9);
}

use super::*;

#[test]
fn yields_growing_prefixes() {
    let frames = TypingEffect::new("Hi!").collect::<Vec<_>>();
    assert_eq!(frames, vec!["H", "Hi", "Hi!"]);
}

#[test]
fn empty_text_yields_nothing() {
    let mut effect = TypingEffect::new("");
    assert!(effect.is_done());
    assert_eq!(effect.next(), None);
}

#[test]
fn multibyte_characters_are_typed_whole() {
    let frames = TypingEffect::new("مرحبا").collect::<Vec<_>>();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[0], "م");
    assert_eq!(frames[4], "مرحبا");
}

#[test]
fn is_done_after_last_frame() {
    let mut effect = TypingEffect::new("ok");
    effect.next();
    assert!(!effect.is_done());
    effect.next();
    assert!(effect.is_done());
}

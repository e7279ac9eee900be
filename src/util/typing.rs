//! Typewriter effect for the hero title.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Yields successive prefixes of `text`, one more character each time,
/// ending with the full text.
#[derive(Clone, Debug)]
pub struct TypingEffect {
    text: String,
    /// Byte offset of the end of the last yielded prefix.
    end: usize,
}

impl TypingEffect {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), end: 0 }
    }

    pub fn is_done(&self) -> bool {
        self.end >= self.text.len()
    }
}

impl Iterator for TypingEffect {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let next_char = self.text[self.end..].chars().next()?;
        self.end += next_char.len_utf8();
        Some(self.text[..self.end].to_owned())
    }
}

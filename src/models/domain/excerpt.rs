use std::fmt;

pub const MAX_EXCERPT_CHARS: usize = 1000;

/// Bounded plain-text context handed to the generation prompt.
///
/// Always non-empty, trimmed at both ends and at most [`MAX_EXCERPT_CHARS`]
/// characters long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentExcerpt(String);

impl ContentExcerpt {
    /// Trims `text` and keeps its first [`MAX_EXCERPT_CHARS`] characters.
    /// Returns `None` when nothing is left.
    pub fn from_text(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let excerpt = match trimmed.char_indices().nth(MAX_EXCERPT_CHARS) {
            Some((end, _)) => &trimmed[..end],
            None => trimmed,
        };
        Some(Self(excerpt.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for ContentExcerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_text_has_no_excerpt() {
        assert!(ContentExcerpt::from_text("").is_none());
        assert!(ContentExcerpt::from_text("  \n\t  ").is_none());
    }

    #[test]
    fn short_text_is_only_trimmed() {
        let excerpt = ContentExcerpt::from_text("\n  Annual audit plan  \n").unwrap();
        assert_eq!(excerpt.as_str(), "Annual audit plan");
    }

    #[test]
    fn long_text_keeps_first_thousand_characters() {
        let text = format!("  {}  ", "x".repeat(1500));
        let excerpt = ContentExcerpt::from_text(&text).unwrap();
        assert_eq!(excerpt.char_count(), MAX_EXCERPT_CHARS);
        assert_eq!(excerpt.as_str(), "x".repeat(MAX_EXCERPT_CHARS));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(1200);
        let excerpt = ContentExcerpt::from_text(&text).unwrap();
        assert_eq!(excerpt.char_count(), MAX_EXCERPT_CHARS);
        assert_eq!(excerpt.as_str().len(), MAX_EXCERPT_CHARS * 2);
    }

    #[test]
    fn exactly_max_length_is_untouched() {
        let text = "y".repeat(MAX_EXCERPT_CHARS);
        assert_eq!(ContentExcerpt::from_text(&text).unwrap().as_str(), text);
    }
}

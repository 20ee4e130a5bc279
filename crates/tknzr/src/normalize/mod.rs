//! # Text Normalization
//!
//! Raw text is canonicalized before splitting so that encoding-level
//! variants of the same logical text map to the same tokens:
//!
//! 1. NFKC (compose, then fold compatibility forms).
//! 2. Whitespace runs (including no-break and other exotic spaces)
//!    collapse to one ASCII space; leading/trailing whitespace is dropped.
//! 3. Optional lowercasing.
//!
//! Normalization is total and idempotent.

use unicode_normalization::UnicodeNormalization;

/// Text normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextNormalizer {
    /// Lowercase normalized text.
    pub case_fold: bool,
}

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new(case_fold: bool) -> Self {
        Self { case_fold }
    }

    /// Normalize `text`.
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        let text: String = text.nfkc().collect();
        let text = if self.case_fold {
            // Lowercasing can leave non-NFKC sequences behind.
            text.chars()
                .flat_map(char::to_lowercase)
                .nfkc()
                .collect()
        } else {
            text
        };
        collapse_whitespace(&text)
    }
}

/// Collapse whitespace runs to a single ASCII space, and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

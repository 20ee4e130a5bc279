//! # Character Splitter

use crate::{TextSplitter, errors::TkResult};

/// One token per Unicode scalar value; spaces included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSplitter;

impl TextSplitter for CharSplitter {
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        Ok(text.chars().map(String::from).collect())
    }

    fn join(
        &self,
        tokens: &[String],
    ) -> String {
        tokens.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_split_join() {
        let tokens = CharSplitter.split("a b\u{00e9}").unwrap();
        assert_eq!(tokens, vec!["a", " ", "b", "\u{00e9}"]);
        assert_eq!(CharSplitter.join(&tokens), "a b\u{00e9}");

        assert!(CharSplitter.split("").unwrap().is_empty());
    }
}

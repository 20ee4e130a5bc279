//! # Whitespace Splitter

use crate::{TextSplitter, errors::TkResult};

/// Splits on whitespace; joins with a single space.
///
/// Empty text splits to no tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceSplitter;

impl TextSplitter for WhitespaceSplitter {
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn join(
        &self,
        tokens: &[String],
    ) -> String {
        tokens.join(" ")
    }
}

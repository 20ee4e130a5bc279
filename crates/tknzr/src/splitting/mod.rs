//! # Text Splitting
//!
//! A [`TextSplitter`] is the tokenization strategy a [`crate::Tokenizer`]
//! is polymorphic over: it splits normalized text into token strings,
//! and joins token strings back into text.
//!
//! `join` need not be an exact inverse of `split`; but for text whose
//! tokens are all in-vocabulary, ``split(join(split(text)))`` must equal
//! ``split(text)``.

mod char_splitter;
mod whitespace_splitter;

use std::{str::FromStr, sync::Arc};

#[doc(inline)]
pub use char_splitter::CharSplitter;
#[doc(inline)]
pub use whitespace_splitter::WhitespaceSplitter;

use crate::errors::{TkResult, TknzrError};

/// Split/join capability supplied by a concrete tokenizer variant.
pub trait TextSplitter {
    /// Split normalized text into a sequence of token strings.
    ///
    /// ## Returns
    /// A `TkResult` holding the tokens; errors are propagated to the
    /// caller of encoding or vocabulary building unchanged.
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>>;

    /// Join a token sequence into one string.
    fn join(
        &self,
        tokens: &[String],
    ) -> String;
}

impl<S: TextSplitter + ?Sized> TextSplitter for &S {
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        (**self).split(text)
    }

    fn join(
        &self,
        tokens: &[String],
    ) -> String {
        (**self).join(tokens)
    }
}

impl<S: TextSplitter + ?Sized> TextSplitter for Box<S> {
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        (**self).split(text)
    }

    fn join(
        &self,
        tokens: &[String],
    ) -> String {
        (**self).join(tokens)
    }
}

impl<S: TextSplitter + ?Sized> TextSplitter for Arc<S> {
    fn split(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        (**self).split(text)
    }

    fn join(
        &self,
        tokens: &[String],
    ) -> String {
        (**self).join(tokens)
    }
}

/// Named selection of the built-in splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitterKind {
    /// [`CharSplitter`].
    Char,

    /// [`WhitespaceSplitter`].
    Whitespace,
}

impl SplitterKind {
    /// The kind's display name.
    pub fn name(self) -> &'static str {
        match self {
            SplitterKind::Char => "char",
            SplitterKind::Whitespace => "whitespace",
        }
    }

    /// Build the selected splitter.
    pub fn build(self) -> Box<dyn TextSplitter + Send + Sync> {
        match self {
            SplitterKind::Char => Box::new(CharSplitter),
            SplitterKind::Whitespace => Box::new(WhitespaceSplitter),
        }
    }
}

impl FromStr for SplitterKind {
    type Err = TknzrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "char" | "character" => Ok(SplitterKind::Char),
            "whitespace" | "ws" => Ok(SplitterKind::Whitespace),
            _ => Err(TknzrError::InvalidConfig(format!(
                "unknown splitter {s:?}; expected \"char\" or \"whitespace\""
            ))),
        }
    }
}

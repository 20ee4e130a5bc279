//! # Tokenizer
//!
//! [`Tokenizer`] ties normalization, a [`crate::TextSplitter`], and a
//! [`crate::TokenVocab`] together; [`TokenizerOptions`] configures it,
//! and [`TokenizerConfig`] is its persistable snapshot.

mod sequence;
mod tokenizer_config;
mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use sequence::fit_to_length;
#[doc(inline)]
pub use tokenizer_config::*;
#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;

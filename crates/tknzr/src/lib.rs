//! # `tknzr` Vocabulary Tokenization Core
//!
//! `tknzr` converts text to and from vocabulary-indexed token id sequences,
//! and grows a bounded vocabulary from a corpus by token frequency.
//!
//! Concrete tokenization strategies (character-level, whitespace-level, ...)
//! plug in through a single seam: the [`TextSplitter`] trait, which supplies
//! `split` and `join`. Everything else lives here:
//!
//! * [`normalize`] canonicalizes raw text (NFKC, whitespace, case folding).
//! * [`vocab`] owns the bidirectional ``{ token <-> id }`` store and the
//!   four reserved special tokens.
//! * [`tokenizer`] encodes/decodes fixed-format id sequences
//!   (`[bos] ... [eos] [pad]*`).
//! * [`training`] counts corpus tokens and admits them into a vocabulary
//!   under size and minimum-frequency caps.
//! * [`io`] reads and writes the persistence value object as JSON.
//!
//! ```rust
//! use tknzr::{Tokenizer, TokenizerOptions, splitting::WhitespaceSplitter};
//!
//! # fn main() -> tknzr::TkResult<()> {
//! let options = TokenizerOptions::default()
//!     .with_max_vocab_size(10)
//!     .with_min_frequency(1);
//! let mut tokenizer: Tokenizer<u32, _> = Tokenizer::new(options, WhitespaceSplitter)?;
//!
//! tokenizer.try_build_vocab(["a a b"])?;
//!
//! let ids = tokenizer.try_encode("a c", Some(5))?;
//! assert_eq!(ids, vec![0, 4, 3, 1, 2]);
//!
//! assert_eq!(tokenizer.decode(&ids, true), "a [unk]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod errors;
pub mod io;
pub mod normalize;
pub mod splitting;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{TkResult, TknzrError};
#[doc(inline)]
pub use normalize::TextNormalizer;
#[doc(inline)]
pub use splitting::TextSplitter;
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerConfig, TokenizerOptions};
#[doc(inline)]
pub use training::{BuildStop, BuildSummary};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialToken, TokenVocab};

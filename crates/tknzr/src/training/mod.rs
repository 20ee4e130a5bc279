//! # Vocabulary Training
//!
//! Support for growing a [`crate::vocab::TokenVocab`] from a corpus.
//!
//! Training is two steps:
//! * [`TokenCounter`] - count normalized, split corpus tokens,
//!   remembering first-seen order.
//! * [`admit_ranked`] - walk the candidates by count descending
//!   (ties: first seen first), and insert them at fresh ids until
//!   the size cap or the frequency floor is hit.
//!
//! [`crate::Tokenizer::try_build_vocab`] wires both together.
//!
//! Repeated builds are additive: tokens admitted by an earlier build
//! keep their ids and are never re-ranked.

mod token_counter;
mod training_types;
mod vocab_builder;

#[doc(inline)]
pub use token_counter::TokenCounter;
#[doc(inline)]
pub use training_types::{CountType, StringChunkType};
#[doc(inline)]
pub use vocab_builder::{BuildStop, BuildSummary, admit_ranked};

//! # Vocabulary
//!
//! The vocabulary store is [`TokenVocab`], a bijective ``{ token <-> id }``
//! mapping which always carries the four [`SpecialToken`] entries:
//!
//! | token   | id |
//! |---------|----|
//! | `[bos]` | 0  |
//! | `[eos]` | 1  |
//! | `[pad]` | 2  |
//! | `[unk]` | 3  |
//!
//! Vocabularies only grow; see [`crate::training`].

pub mod special_tokens;
pub mod token_vocab;

#[doc(inline)]
pub use special_tokens::{SPECIAL_TOKEN_COUNT, SPECIAL_TOKENS, SpecialToken};
#[doc(inline)]
pub use token_vocab::TokenVocab;

//! # Tokenizer Config IO
//!
//! [`crate::TokenizerConfig`] is persisted as a JSON object:
//!
//! ```json
//! {
//!   "case_fold": false,
//!   "max_vocab_size": 10,
//!   "min_frequency": 1,
//!   "token_to_id": {"[bos]": 0, "[eos]": 1, "[pad]": 2, "[unk]": 3, "a": 4}
//! }
//! ```
//!
//! ## Loading A Tokenizer
//!
//! ```rust,no_run
//! use tknzr::{Tokenizer, io::load_config_path, splitting::CharSplitter};
//!
//! fn example() -> tknzr::TkResult<Tokenizer<u32, CharSplitter>> {
//!     let config = load_config_path("exp/my_exp/tknzr.json")?;
//!     Tokenizer::from_config(&config, CharSplitter)
//! }
//! ```

mod json_config;

#[doc(inline)]
pub use json_config::*;

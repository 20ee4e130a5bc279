use serde::{Deserialize, Serialize};

use crate::{
    errors::{TkResult, TknzrError},
    types::TokenType,
    vocab::SPECIAL_TOKEN_COUNT,
};

/// Options for configuring a [`crate::Tokenizer`].
///
/// Immutable once a tokenizer is built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerOptions {
    /// Lowercase text during normalization.
    #[serde(alias = "is_uncased")]
    pub case_fold: bool,

    /// Hard cap on total vocabulary entries, specials included.
    #[serde(alias = "max_vocab")]
    pub max_vocab_size: usize,

    /// Minimum corpus frequency for a token to be admitted.
    #[serde(alias = "min_count")]
    pub min_frequency: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            case_fold: false,
            max_vocab_size: 32_768,
            min_frequency: 1,
        }
    }
}

impl TokenizerOptions {
    /// Sets case folding.
    pub fn with_case_fold(
        self,
        case_fold: bool,
    ) -> Self {
        Self { case_fold, ..self }
    }

    /// Sets the vocab size cap.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - total entry cap; must be >= the special token count.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Sets the minimum admission frequency.
    pub fn with_min_frequency(
        self,
        min_frequency: usize,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Validates the options for token type `T`.
    pub fn validate<T: TokenType>(&self) -> TkResult<()> {
        if self.max_vocab_size < SPECIAL_TOKEN_COUNT {
            return Err(TknzrError::InvalidConfig(format!(
                "max_vocab_size ({}) must be at least the special token count ({SPECIAL_TOKEN_COUNT})",
                self.max_vocab_size
            )));
        }
        if T::from_usize(self.max_vocab_size - 1).is_none() {
            return Err(TknzrError::VocabSizeOverflow {
                size: self.max_vocab_size,
            });
        }
        Ok(())
    }
}

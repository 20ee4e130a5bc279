//! # Error Types

/// Errors from tknzr operations.
#[derive(Debug, thiserror::Error)]
pub enum TknzrError {
    /// Tokenizer configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// A split capability rejected its input.
    #[error("split failed: {0}")]
    Split(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for tknzr operations.
pub type TkResult<T> = core::result::Result<T, TknzrError>;

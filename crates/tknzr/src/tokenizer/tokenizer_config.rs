use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{TkResult, TknzrError},
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::TokenVocab,
};

/// Persistable snapshot of a [`crate::Tokenizer`].
///
/// Holds everything needed to rebuild an equivalent tokenizer:
/// the options and the full ``{ token -> id }`` map. The split strategy
/// is not part of the snapshot; it is supplied again on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// See [`TokenizerOptions::case_fold`].
    #[serde(alias = "is_uncased")]
    pub case_fold: bool,

    /// See [`TokenizerOptions::max_vocab_size`].
    #[serde(alias = "max_vocab")]
    pub max_vocab_size: usize,

    /// See [`TokenizerOptions::min_frequency`].
    #[serde(alias = "min_count")]
    pub min_frequency: usize,

    /// The ``{ token -> id }`` map.
    #[serde(alias = "tk2id")]
    pub token_to_id: BTreeMap<String, u64>,
}

impl TokenizerConfig {
    /// Snapshot `options` and `vocab`.
    pub fn new<T: TokenType>(
        options: &TokenizerOptions,
        vocab: &TokenVocab<T>,
    ) -> TkResult<Self> {
        let token_to_id = vocab
            .token_map()
            .iter()
            .map(|(token, id)| {
                id.to_u64()
                    .map(|id| (token.clone(), id))
                    .ok_or(TknzrError::TokenOutOfRange)
            })
            .collect::<TkResult<BTreeMap<_, _>>>()?;

        Ok(Self {
            case_fold: options.case_fold,
            max_vocab_size: options.max_vocab_size,
            min_frequency: options.min_frequency,
            token_to_id,
        })
    }

    /// The tokenizer options.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions {
            case_fold: self.case_fold,
            max_vocab_size: self.max_vocab_size,
            min_frequency: self.min_frequency,
        }
    }

    /// Rebuild the vocabulary in token type `T`.
    pub fn to_vocab<T: TokenType>(&self) -> TkResult<TokenVocab<T>> {
        let pairs = self
            .token_to_id
            .iter()
            .map(|(token, &id)| {
                T::from_u64(id)
                    .map(|id| (token.as_str(), id))
                    .ok_or(TknzrError::TokenOutOfRange)
            })
            .collect::<TkResult<Vec<_>>>()?;

        TokenVocab::from_token_map(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_restores_vocab() {
        let mut vocab: TokenVocab<u32> = TokenVocab::new();
        vocab.insert("a".to_string(), 4);
        let options = TokenizerOptions::default().with_case_fold(true);

        let config = TokenizerConfig::new(&options, &vocab).unwrap();
        assert_eq!(config.options(), options);
        assert_eq!(config.token_to_id.len(), 5);
        assert_eq!(config.token_to_id["a"], 4);

        let restored: TokenVocab<u32> = config.to_vocab().unwrap();
        assert_eq!(restored, vocab);
    }

    #[test]
    fn test_to_vocab_rejects_out_of_range_ids() {
        let config = TokenizerConfig {
            case_fold: false,
            max_vocab_size: 10,
            min_frequency: 1,
            token_to_id: [("big".to_string(), 70_000)].into_iter().collect(),
        };
        assert!(matches!(
            config.to_vocab::<u16>(),
            Err(TknzrError::TokenOutOfRange)
        ));
    }

    #[test]
    fn test_legacy_json_keys() {
        let config: TokenizerConfig = serde_json::from_str(
            r#"{
                "is_uncased": false,
                "max_vocab": 10,
                "min_count": 1,
                "tk2id": {"[bos]": 0, "[eos]": 1, "[pad]": 2, "[unk]": 3, "a": 4}
            }"#,
        )
        .unwrap();

        assert_eq!(config.max_vocab_size, 10);
        assert_eq!(config.token_to_id["a"], 4);
    }
}

//! # Token Vocabulary Store

use crate::{
    errors::{TkResult, TknzrError},
    types::{TkHashMap, TokenType, hash_map_with_capacity},
    vocab::special_tokens::{SPECIAL_TOKEN_COUNT, SpecialToken},
};

/// Bidirectional ``{ token <-> id }`` vocabulary.
///
/// Both directions are owned here and only ever mutated together,
/// so every ``(token, id)`` pair is present in both maps or in neither.
///
/// The store only grows: no removal, no id reuse, no reassignment.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    token_to_id: TkHashMap<String, T>,
    id_to_token: TkHashMap<T, String>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Create a vocabulary holding only the special tokens.
    pub fn new() -> Self {
        let mut vocab = Self {
            token_to_id: hash_map_with_capacity(SPECIAL_TOKEN_COUNT),
            id_to_token: hash_map_with_capacity(SPECIAL_TOKEN_COUNT),
        };
        for special in SpecialToken::ALL {
            vocab.insert(special.text().to_string(), special.id());
        }
        vocab
    }

    /// Seed a vocabulary from a caller supplied ``{ token -> id }`` map.
    ///
    /// The map is trusted to already contain the special tokens at their
    /// reserved ids; a missing entry is logged, not rejected.
    ///
    /// ## Arguments
    /// * `token_map` - ``(token, id)`` pairs.
    ///
    /// ## Returns
    /// A `TkResult<TokenVocab>`, with errors when two tokens share an id.
    pub fn from_token_map<I, S>(token_map: I) -> TkResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        let mut token_to_id = TkHashMap::default();
        let mut id_to_token: TkHashMap<T, String> = TkHashMap::default();

        for (token, id) in token_map {
            let token = token.into();
            if let Some(other) = id_to_token.get(&id) {
                return Err(TknzrError::VocabConflict(format!(
                    "tokens {other:?} and {token:?} share id {id}"
                )));
            }
            if token_to_id.contains_key(&token) {
                return Err(TknzrError::VocabConflict(format!(
                    "token {token:?} is mapped twice"
                )));
            }
            id_to_token.insert(id, token.clone());
            token_to_id.insert(token, id);
        }

        for special in SpecialToken::ALL {
            if token_to_id.get(special.text()) != Some(&special.id()) {
                log::warn!(
                    "seeded vocab does not map {:?} to its reserved id {}",
                    special.text(),
                    special.raw_id()
                );
            }
        }

        Ok(Self {
            token_to_id,
            id_to_token,
        })
    }

    /// The number of unique tokens, specials included.
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `token` is in the vocabulary.
    pub fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Returns the id of `token`, if any.
    pub fn get_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_to_id.get(token).copied()
    }

    /// Returns the token for `id`, if any.
    pub fn get_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Look up the id of `token`; unknown tokens resolve to the unk id.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> T {
        self.get_id(token).unwrap_or_else(|| SpecialToken::Unk.id())
    }

    /// Look up the token for `id`; unknown ids resolve to the unk token.
    ///
    /// Foreign or corrupted ids are expected input here, not a failure.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> &str {
        self.get_token(id)
            .unwrap_or_else(|| SpecialToken::Unk.text())
    }

    /// The highest assigned id, or None for an empty store.
    pub fn max_id(&self) -> Option<T> {
        self.id_to_token.keys().max().copied()
    }

    /// The ``{ token -> id }`` map.
    pub fn token_map(&self) -> &TkHashMap<String, T> {
        &self.token_to_id
    }

    /// All ``(id, token)`` pairs, sorted by id.
    pub fn sorted_entries(&self) -> Vec<(T, &str)> {
        let mut entries: Vec<(T, &str)> = self
            .id_to_token
            .iter()
            .map(|(&id, token)| (id, token.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(id, _)| id);
        entries
    }

    /// Insert a new ``(token, id)`` pair.
    ///
    /// The caller guarantees `token` is absent and `id` is unused.
    pub(crate) fn insert(
        &mut self,
        token: String,
        id: T,
    ) {
        debug_assert!(!self.token_to_id.contains_key(&token));
        debug_assert!(!self.id_to_token.contains_key(&id));

        self.id_to_token.insert(id, token.clone());
        self.token_to_id.insert(token, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vocab_has_only_specials() {
        let vocab: TokenVocab<u32> = TokenVocab::new();
        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.max_id(), Some(3));

        assert_eq!(
            vocab.sorted_entries(),
            vec![(0, "[bos]"), (1, "[eos]"), (2, "[pad]"), (3, "[unk]")]
        );
    }

    #[test]
    fn test_lookup_misses_resolve_to_unk() {
        let vocab: TokenVocab<u16> = TokenVocab::new();
        assert_eq!(vocab.lookup_id("nope"), 3);
        assert_eq!(vocab.lookup_token(999), "[unk]");

        assert_eq!(vocab.get_id("nope"), None);
        assert_eq!(vocab.get_token(999), None);
    }

    #[test]
    fn test_insert_keeps_both_directions() {
        let mut vocab: TokenVocab<u32> = TokenVocab::new();
        vocab.insert("hello".to_string(), 4);

        assert_eq!(vocab.len(), 5);
        assert!(vocab.contains_token("hello"));
        assert_eq!(vocab.lookup_id("hello"), 4);
        assert_eq!(vocab.lookup_token(4), "hello");
        assert_eq!(vocab.max_id(), Some(4));
    }

    #[test]
    fn test_from_token_map() {
        let vocab: TokenVocab<u32> = TokenVocab::from_token_map([
            ("[bos]", 0),
            ("[eos]", 1),
            ("[pad]", 2),
            ("[unk]", 3),
            ("x", 9),
        ])
        .unwrap();

        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.lookup_token(9), "x");
        assert_eq!(vocab.max_id(), Some(9));
        // Gaps are never filled by lookups.
        assert_eq!(vocab.lookup_token(5), "[unk]");
    }

    #[test]
    fn test_from_token_map_rejects_shared_ids() {
        let res: TkResult<TokenVocab<u32>> = TokenVocab::from_token_map([("a", 4), ("b", 4)]);
        assert!(matches!(res, Err(TknzrError::VocabConflict(_))));
    }
}

use compact_str::CompactString;

use crate::{
    errors::TkResult,
    normalize::TextNormalizer,
    splitting::TextSplitter,
    tokenizer::{TokenizerConfig, TokenizerOptions, sequence::fit_to_length},
    training::{BuildSummary, TokenCounter, admit_ranked},
    types::TokenType,
    vocab::{SpecialToken, TokenVocab},
};

/// Vocabulary-indexed tokenizer.
///
/// Combines:
///  * a [`TextNormalizer`],
///  * a [`TextSplitter`] strategy, and
///  * an owned [`TokenVocab`].
///
/// Encodings have the form:
/// ```text
/// [bos] tk_1 tk_2 [unk] tk_4 ... tk_n [eos] [pad] ... [pad]
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType, S: TextSplitter> {
    options: TokenizerOptions,
    normalizer: TextNormalizer,
    vocab: TokenVocab<T>,
    splitter: S,
}

impl<T: TokenType, S: TextSplitter> Tokenizer<T, S> {
    /// Create a tokenizer whose vocabulary holds only the special tokens.
    ///
    /// ## Arguments
    /// * `options` - the tokenizer options.
    /// * `splitter` - the split/join strategy.
    ///
    /// ## Returns
    /// A `TkResult<Tokenizer>`, with errors on invalid options.
    pub fn new(
        options: TokenizerOptions,
        splitter: S,
    ) -> TkResult<Self> {
        Self::with_vocab(options, TokenVocab::new(), splitter)
    }

    /// Create a tokenizer over a pre-built vocabulary.
    ///
    /// ## Arguments
    /// * `options` - the tokenizer options.
    /// * `vocab` - the seed vocabulary.
    /// * `splitter` - the split/join strategy.
    pub fn with_vocab(
        options: TokenizerOptions,
        vocab: TokenVocab<T>,
        splitter: S,
    ) -> TkResult<Self> {
        options.validate::<T>()?;
        Ok(Self {
            options,
            normalizer: TextNormalizer::new(options.case_fold),
            vocab,
            splitter,
        })
    }

    /// Rebuild a tokenizer from a persisted [`TokenizerConfig`].
    pub fn from_config(
        config: &TokenizerConfig,
        splitter: S,
    ) -> TkResult<Self> {
        Self::with_vocab(config.options(), config.to_vocab()?, splitter)
    }

    /// Snapshot this tokenizer as a [`TokenizerConfig`].
    pub fn to_config(&self) -> TkResult<TokenizerConfig> {
        TokenizerConfig::new(&self.options, &self.vocab)
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }

    /// Get the split/join strategy.
    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// The current vocabulary size, specials included.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Normalize `text`; see [`TextNormalizer`].
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        self.normalizer.normalize(text)
    }

    /// Normalize and split `text` into token strings.
    pub fn try_tokenize(
        &self,
        text: &str,
    ) -> TkResult<Vec<String>> {
        self.splitter.split(&self.normalize(text))
    }

    /// Encode `text` as ``[bos] tokens.. [eos]``, with no length policy.
    fn try_encode_natural(
        &self,
        text: &str,
    ) -> TkResult<Vec<T>> {
        let tokens = self.try_tokenize(text)?;

        let mut ids = Vec::with_capacity(tokens.len() + 2);
        ids.push(SpecialToken::Bos.id());
        ids.extend(tokens.iter().map(|tk| self.vocab.lookup_id(tk)));
        ids.push(SpecialToken::Eos.id());
        Ok(ids)
    }

    /// Encode text into token ids.
    ///
    /// Unknown tokens encode as the unk id.
    ///
    /// ## Arguments
    /// * `text` - the raw text to encode.
    /// * `max_length` - `None` for no limit; otherwise the result is
    ///   truncated (trailing entries, possibly eos, are dropped) or
    ///   right-padded with the pad id to exactly this length.
    ///
    /// ## Returns
    /// A `TkResult` holding the ids; errors only if the splitter fails.
    pub fn try_encode(
        &self,
        text: &str,
        max_length: Option<usize>,
    ) -> TkResult<Vec<T>> {
        let mut ids = self.try_encode_natural(text)?;
        if let Some(len) = max_length {
            fit_to_length(&mut ids, len, SpecialToken::Pad.id());
        }
        Ok(ids)
    }

    /// Decode token ids back to text.
    ///
    /// Unknown ids decode as the unk token.
    ///
    /// ## Arguments
    /// * `ids` - the ids to decode.
    /// * `remove_special` - drop bos, eos, and pad ids first;
    ///   unk ids are always kept, as evidence of out-of-vocabulary input.
    pub fn decode(
        &self,
        ids: &[T],
        remove_special: bool,
    ) -> String {
        let tokens: Vec<String> = ids
            .iter()
            .filter(|&&id| !(remove_special && is_removable_special(id)))
            .map(|&id| self.vocab.lookup_token(id).to_string())
            .collect();

        self.splitter.join(&tokens)
    }

    /// Encode a batch of text into equal length id sequences.
    ///
    /// ## Arguments
    /// * `batch` - the texts to encode.
    /// * `max_length` - the common length; `None` uses the longest
    ///   natural (unpadded) encoding in the batch.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn try_encode_batch<B: AsRef<str>>(
        &self,
        batch: &[B],
        max_length: Option<usize>,
    ) -> TkResult<Vec<Vec<T>>> {
        let mut encoded = batch
            .iter()
            .map(|text| self.try_encode_natural(text.as_ref()))
            .collect::<TkResult<Vec<_>>>()?;

        let len = max_length.unwrap_or_else(|| encoded.iter().map(Vec::len).max().unwrap_or(0));

        let pad = SpecialToken::Pad.id();
        for ids in encoded.iter_mut() {
            fit_to_length(ids, len, pad);
        }
        Ok(encoded)
    }

    /// Decode a batch of id sequences; see [`Tokenizer::decode`].
    pub fn decode_batch<B: AsRef<[T]>>(
        &self,
        batch: &[B],
        remove_special: bool,
    ) -> Vec<String> {
        batch
            .iter()
            .map(|ids| self.decode(ids.as_ref(), remove_special))
            .collect()
    }

    /// Grow the vocabulary from a corpus.
    ///
    /// Tokens are admitted by frequency (ties: first seen first) at fresh
    /// ids, until `max_vocab_size` is reached or the next candidate falls
    /// below `min_frequency`. Tokens already in the vocabulary keep their ids.
    ///
    /// ## Arguments
    /// * `texts` - the corpus.
    ///
    /// ## Returns
    /// A `TkResult<BuildSummary>`. A splitter failure is returned before
    /// the vocabulary is touched.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, texts)))]
    pub fn try_build_vocab<I>(
        &mut self,
        texts: I,
    ) -> TkResult<BuildSummary>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counter: TokenCounter<CompactString, u64> = TokenCounter::new();
        for text in texts {
            counter.update_from_tokens(self.try_tokenize(text.as_ref())?);
        }

        log::info!(
            "Building vocab: {} candidate tokens, {} / {} entries in use",
            counter.len(),
            self.vocab.len(),
            self.options.max_vocab_size
        );

        let summary = admit_ranked(
            &mut self.vocab,
            counter.ranked(),
            self.options.max_vocab_size,
            self.options.min_frequency,
        )?;

        log::info!(
            "Finished building vocab: {} admitted, vocab size {}",
            summary.admitted,
            self.vocab.len()
        );

        Ok(summary)
    }
}

fn is_removable_special<T: TokenType>(id: T) -> bool {
    matches!(
        SpecialToken::from_id(id),
        Some(SpecialToken::Bos | SpecialToken::Eos | SpecialToken::Pad)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::TknzrError,
        splitting::{CharSplitter, WhitespaceSplitter},
        training::BuildStop,
    };

    type T = u32;

    fn example_tokenizer() -> Tokenizer<T, WhitespaceSplitter> {
        let options = TokenizerOptions::default()
            .with_max_vocab_size(10)
            .with_min_frequency(1);
        let mut tokenizer = Tokenizer::new(options, WhitespaceSplitter).unwrap();
        tokenizer.try_build_vocab(["a a b"]).unwrap();
        tokenizer
    }

    #[test]
    fn test_example_build_and_encode() {
        let tokenizer = example_tokenizer();
        assert_eq!(tokenizer.vocab().get_id("a"), Some(4));
        assert_eq!(tokenizer.vocab().get_id("b"), Some(5));
        assert_eq!(tokenizer.vocab_size(), 6);

        assert_eq!(tokenizer.try_encode("a c", Some(5)).unwrap(), vec![0, 4, 3, 1, 2]);
    }

    #[test]
    fn test_encode_without_limit() {
        let tokenizer = example_tokenizer();
        assert_eq!(tokenizer.try_encode("b a", None).unwrap(), vec![0, 5, 4, 1]);
        assert_eq!(tokenizer.try_encode("", None).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_encode_truncation_drops_eos() {
        let tokenizer = example_tokenizer();
        let ids = tokenizer.try_encode("a b a b", Some(3)).unwrap();
        assert_eq!(ids, vec![0, 4, 5]);

        assert_eq!(tokenizer.try_encode("a b", Some(1)).unwrap(), vec![0]);
        assert!(tokenizer.try_encode("a b", Some(0)).unwrap().is_empty());
    }

    #[test]
    fn test_encode_normalizes() {
        let options = TokenizerOptions::default().with_case_fold(true);
        let mut tokenizer: Tokenizer<T, _> = Tokenizer::new(options, WhitespaceSplitter).unwrap();
        tokenizer.try_build_vocab(["Hello   WORLD"]).unwrap();

        assert_eq!(
            tokenizer.try_encode("\u{00a0}hello\tworld ", None).unwrap(),
            vec![0, 4, 5, 1]
        );
    }

    #[test]
    fn test_decode() {
        let tokenizer = example_tokenizer();

        assert_eq!(tokenizer.decode(&[0, 4, 3, 1, 2], false), "[bos] a [unk] [eos] [pad]");
        assert_eq!(tokenizer.decode(&[0, 4, 3, 1, 2], true), "a [unk]");

        // Unknown ids become the unk token, and are never removed.
        assert_eq!(tokenizer.decode(&[0, 5, 999, 1], true), "b [unk]");
    }

    #[test]
    fn test_batch_encode_uniform_length() {
        let tokenizer = example_tokenizer();
        let batch = tokenizer.try_encode_batch(&["a", "a b a", ""], None).unwrap();

        assert_eq!(
            batch,
            vec![
                vec![0, 4, 1, 2, 2],
                vec![0, 4, 5, 4, 1],
                vec![0, 1, 2, 2, 2],
            ]
        );

        let batch = tokenizer.try_encode_batch(&["a", "a b a"], Some(3)).unwrap();
        assert_eq!(batch, vec![vec![0, 4, 1], vec![0, 4, 5]]);

        let empty: [&str; 0] = [];
        assert!(tokenizer.try_encode_batch(&empty, None).unwrap().is_empty());
    }

    #[test]
    fn test_batch_decode() {
        let tokenizer = example_tokenizer();
        let batch = tokenizer.try_encode_batch(&["a b", "b"], None).unwrap();
        assert_eq!(tokenizer.decode_batch(&batch, true), vec!["a b", "b"]);
    }

    #[test]
    fn test_char_tokenizer() {
        let mut tokenizer: Tokenizer<T, _> =
            Tokenizer::new(TokenizerOptions::default(), CharSplitter).unwrap();
        tokenizer.try_build_vocab(["abca"]).unwrap();

        assert_eq!(tokenizer.vocab().get_id("a"), Some(4));
        assert_eq!(tokenizer.vocab().get_id("b"), Some(5));
        assert_eq!(tokenizer.vocab().get_id("c"), Some(6));

        let ids = tokenizer.try_encode("cab", None).unwrap();
        assert_eq!(ids, vec![0, 6, 4, 5, 1]);
        assert_eq!(tokenizer.decode(&ids, true), "cab");
    }

    #[test]
    fn test_repeated_builds_are_additive() {
        let mut tokenizer = example_tokenizer();
        let summary = tokenizer.try_build_vocab(["b c c"]).unwrap();

        assert_eq!(tokenizer.vocab().get_id("a"), Some(4));
        assert_eq!(tokenizer.vocab().get_id("b"), Some(5));
        assert_eq!(tokenizer.vocab().get_id("c"), Some(6));
        assert_eq!(summary.admitted, 1);
        assert_eq!(summary.skipped_existing, 1);
        assert_eq!(summary.stop, BuildStop::Exhausted);
    }

    struct FailingSplitter;

    impl TextSplitter for FailingSplitter {
        fn split(
            &self,
            text: &str,
        ) -> TkResult<Vec<String>> {
            if text.contains('!') {
                return Err(TknzrError::Split(format!("cannot split {text:?}")));
            }
            WhitespaceSplitter.split(text)
        }

        fn join(
            &self,
            tokens: &[String],
        ) -> String {
            WhitespaceSplitter.join(tokens)
        }
    }

    #[test]
    fn test_split_failures_propagate() {
        let mut tokenizer: Tokenizer<T, _> =
            Tokenizer::new(TokenizerOptions::default(), FailingSplitter).unwrap();

        let res = tokenizer.try_build_vocab(["fine", "not fine!"]);
        assert!(matches!(res, Err(TknzrError::Split(_))));
        // Counting finishes before admission; nothing was inserted.
        assert_eq!(tokenizer.vocab_size(), 4);

        assert!(matches!(
            tokenizer.try_encode("oops!", None),
            Err(TknzrError::Split(_))
        ));
        assert!(tokenizer.try_encode_batch(&["ok", "bad!"], None).is_err());
    }

    #[test]
    fn test_invalid_options_fail_construction() {
        let options = TokenizerOptions::default().with_max_vocab_size(2);
        let res: TkResult<Tokenizer<T, _>> = Tokenizer::new(options, CharSplitter);
        assert!(matches!(res, Err(TknzrError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_round_trip() {
        let tokenizer = example_tokenizer();
        let config = tokenizer.to_config().unwrap();

        let restored: Tokenizer<T, _> = Tokenizer::from_config(&config, WhitespaceSplitter).unwrap();
        assert_eq!(restored.options(), tokenizer.options());
        assert_eq!(restored.vocab(), tokenizer.vocab());
        assert_eq!(
            restored.try_encode("a b c", Some(6)).unwrap(),
            tokenizer.try_encode("a b c", Some(6)).unwrap()
        );
    }
}

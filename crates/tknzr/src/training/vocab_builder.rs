//! # Vocab Builder

use crate::{
    errors::{TkResult, TknzrError},
    training::{CountType, StringChunkType},
    types::TokenType,
    vocab::TokenVocab,
};

/// Why a vocabulary build stopped admitting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStop {
    /// Every candidate was considered.
    Exhausted,

    /// The vocabulary reached `max_vocab_size`.
    SizeCap,

    /// The next candidate fell below `min_frequency`.
    FrequencyFloor,
}

/// Statistics from one vocabulary build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// The number of distinct corpus tokens.
    pub candidates: usize,

    /// The number of tokens inserted into the vocabulary.
    pub admitted: usize,

    /// The number of candidates skipped because they were already present.
    pub skipped_existing: usize,

    /// Why admission stopped.
    pub stop: BuildStop,
}

/// Grow `vocab` from frequency-ranked candidates.
///
/// Candidates must be distinct, and ordered by count descending; both stop conditions
/// rely on that order. New ids start at ``max(existing ids) + 1``.
///
/// ## Arguments
/// * `vocab` - the vocabulary to extend in place.
/// * `ranked` - ``(token, count)`` candidates, highest count first.
/// * `max_vocab_size` - cap on total entries, specials included.
/// * `min_frequency` - minimum count for admission.
///
/// ## Returns
/// A `TkResult<BuildSummary>`; errors if ids run past the range of `T`,
/// in which case nothing is inserted.
pub fn admit_ranked<T, K, C, I>(
    vocab: &mut TokenVocab<T>,
    ranked: I,
    max_vocab_size: usize,
    min_frequency: usize,
) -> TkResult<BuildSummary>
where
    T: TokenType,
    K: StringChunkType,
    C: CountType,
    I: IntoIterator<Item = (K, C)>,
{
    let mut next_id: Option<T> = match vocab.max_id() {
        Some(max) => max.checked_add(&T::one()),
        None => Some(T::zero()),
    };

    let mut summary = BuildSummary {
        candidates: 0,
        admitted: 0,
        skipped_existing: 0,
        stop: BuildStop::Exhausted,
    };

    // Admissions are staged so an id overflow leaves `vocab` untouched.
    let mut staged: Vec<(String, T)> = Vec::new();

    let mut ranked = ranked.into_iter();
    for (token, count) in ranked.by_ref() {
        summary.candidates += 1;

        if vocab.len() + staged.len() >= max_vocab_size {
            summary.stop = BuildStop::SizeCap;
            break;
        }

        if count.to_u64().unwrap_or(u64::MAX) < min_frequency as u64 {
            summary.stop = BuildStop::FrequencyFloor;
            break;
        }

        let token = token.as_ref();
        if vocab.contains_token(token) {
            summary.skipped_existing += 1;
            continue;
        }

        let id = next_id.ok_or(TknzrError::TokenOutOfRange)?;
        staged.push((token.to_string(), id));
        next_id = id.checked_add(&T::one());
    }
    summary.candidates += ranked.count();

    summary.admitted = staged.len();
    for (token, id) in staged {
        vocab.insert(token, id);
    }

    log::debug!(
        "Vocab admission stopped ({:?}) after {} of {} candidates",
        summary.stop,
        summary.admitted + summary.skipped_existing,
        summary.candidates
    );

    Ok(summary)
}

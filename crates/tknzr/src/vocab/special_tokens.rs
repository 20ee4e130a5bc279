//! # Special Tokens
//!
//! The four reserved entries every vocabulary carries, at fixed ids `0..=3`.

use crate::types::TokenType;

/// A reserved special token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialToken {
    /// Beginning-of-sequence; prepended by encoding.
    Bos,

    /// End-of-sequence; appended by encoding.
    Eos,

    /// Padding; fills encodings up to a requested length.
    Pad,

    /// Unknown; stands in for out-of-vocabulary tokens and ids.
    Unk,
}

/// The fixed ``(special, text, id)`` table used to seed every vocabulary.
pub const SPECIAL_TOKENS: [(SpecialToken, &str, u8); 4] = [
    (SpecialToken::Bos, "[bos]", 0),
    (SpecialToken::Eos, "[eos]", 1),
    (SpecialToken::Pad, "[pad]", 2),
    (SpecialToken::Unk, "[unk]", 3),
];

/// The number of reserved special tokens.
pub const SPECIAL_TOKEN_COUNT: usize = SPECIAL_TOKENS.len();

impl SpecialToken {
    /// All special tokens, in id order.
    pub const ALL: [SpecialToken; 4] = [
        SpecialToken::Bos,
        SpecialToken::Eos,
        SpecialToken::Pad,
        SpecialToken::Unk,
    ];

    /// The reserved id, as a `u8`.
    pub const fn raw_id(self) -> u8 {
        SPECIAL_TOKENS[self as usize].2
    }

    /// The reserved token text.
    pub const fn text(self) -> &'static str {
        SPECIAL_TOKENS[self as usize].1
    }

    /// The reserved id in the target token type.
    pub fn id<T: TokenType>(self) -> T {
        <T as From<u8>>::from(self.raw_id())
    }

    /// Which special token (if any) owns `id`.
    pub fn from_id<T: TokenType>(id: T) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id::<T>() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_table_is_id_ordered() {
        for (idx, (special, _, id)) in SPECIAL_TOKENS.iter().enumerate() {
            assert_eq!(*id as usize, idx);
            assert_eq!(special.raw_id() as usize, idx);
            assert_eq!(SpecialToken::ALL[idx], *special);
        }
    }

    #[test]
    fn test_special_lookup() {
        assert_eq!(SpecialToken::Unk.text(), "[unk]");
        assert_eq!(SpecialToken::Pad.id::<u64>(), 2);
        assert_eq!(SpecialToken::from_id(1u32), Some(SpecialToken::Eos));
        assert_eq!(SpecialToken::from_id(4u32), None);
    }
}

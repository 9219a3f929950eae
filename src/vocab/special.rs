//! # Special Token Set

use crate::types::TokenId;
use serde::{Deserialize, Serialize};

/// Literal text of the start-of-text token.
pub const START_OF_TEXT: &str = "<|startoftext|>";

/// Literal text of the end-of-text token.
pub const END_OF_TEXT: &str = "<|endoftext|>";

/// Literal text of the padding token.
pub const PADDING: &str = "<|padding|>";

/// Literal text of the unknown-content token.
pub const UNKNOWN: &str = "<|unk|>";

/// Literal text of the mask token.
pub const MASK: &str = "<|mask|>";

/// Reserved control tokens with fixed, caller-assigned ids.
///
/// The ids must be mutually distinct; learned-symbol ids are allocated
/// strictly above the largest of them, so the two id spaces never collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Start-of-text boundary id.
    pub start_of_text: TokenId,

    /// End-of-text boundary id.
    pub end_of_text: TokenId,

    /// Padding id.
    pub padding: TokenId,

    /// Unknown-content substitution id.
    pub unknown: TokenId,

    /// Mask id.
    pub mask: TokenId,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            end_of_text: 100_257,
            padding: 100_258,
            start_of_text: 100_259,
            unknown: 100_260,
            mask: 100_261,
        }
    }
}

impl SpecialTokens {
    /// The token texts paired with their ids, in a fixed order.
    pub fn pairs(&self) -> [(&'static str, TokenId); 5] {
        [
            (END_OF_TEXT, self.end_of_text),
            (PADDING, self.padding),
            (START_OF_TEXT, self.start_of_text),
            (UNKNOWN, self.unknown),
            (MASK, self.mask),
        ]
    }

    /// The largest special id; learned ids start strictly above it.
    pub fn max_id(&self) -> TokenId {
        self.pairs()
            .iter()
            .map(|&(_, id)| id)
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_ids_distinct() {
        let specials = SpecialTokens::default();
        let ids: HashSet<TokenId> = specials.pairs().iter().map(|&(_, id)| id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_max_id() {
        let specials = SpecialTokens::default();
        assert_eq!(specials.max_id(), 100_261);

        let small = SpecialTokens {
            start_of_text: 0,
            end_of_text: 1,
            padding: 2,
            unknown: 3,
            mask: 4,
        };
        assert_eq!(small.max_id(), 4);
    }
}

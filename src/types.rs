//! # Common Types and Aliases

use compact_str::CompactString;

/// An immutable string fragment handled by the tokenizer.
///
/// A symbol is one character, one UTF-8 byte rendered as a code point, or the
/// concatenation of two previously merged symbols. Symbols are compared and
/// hashed by value.
pub type Symbol = CompactString;

/// Integer id assigned to a symbol by the vocabulary.
pub type TokenId = u32;

/// Frequency count for words and symbol pairs.
pub type Count = u64;

/// An adjacent pair of symbols.
pub type Pair = (Symbol, Symbol);

/// ``{ Symbol -> TokenId }`` map.
pub type SymbolToIdMap = ahash::AHashMap<Symbol, TokenId>;

/// ``{ TokenId -> Symbol }`` map.
pub type IdToSymbolMap = ahash::AHashMap<TokenId, Symbol>;

/// ``{ Pair -> Count }`` map.
pub type PairCountMap = ahash::AHashMap<Pair, Count>;

/// ``{ Pair -> rank }`` map.
pub type PairRankMap = ahash::AHashMap<Pair, usize>;

/// The symbol a merge of `left` and `right` produces.
///
/// Merged symbols are plain concatenations, so a merge rule alone is enough
/// to recover the symbol it learned.
pub fn merged_symbol(
    left: &Symbol,
    right: &Symbol,
) -> Symbol {
    let mut merged = Symbol::with_capacity(left.len() + right.len());
    merged.push_str(left);
    merged.push_str(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_symbol() {
        let left = Symbol::from("lo");
        let right = Symbol::from("w");

        assert_eq!(merged_symbol(&left, &right), Symbol::from("low"));
    }
}

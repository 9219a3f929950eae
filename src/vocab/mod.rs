//! # Symbol Vocabulary

pub mod io;
mod special;

pub use special::{SpecialTokens, END_OF_TEXT, MASK, PADDING, START_OF_TEXT, UNKNOWN};

use crate::types::{IdToSymbolMap, Symbol, SymbolToIdMap, TokenId};

/// Mapping between symbols and token ids, bijective on its range.
///
/// Learned-symbol ids are assigned in increasing order and never reused; the
/// reverse mapping stays consistent with the forward mapping after every
/// mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    symbol_to_id: SymbolToIdMap,
    id_to_symbol: IdToSymbolMap,
    next_id: TokenId,
}

impl Vocabulary {
    /// Seed a vocabulary with the given special tokens.
    ///
    /// The first free id lands strictly above the largest special id.
    pub fn seeded(specials: &SpecialTokens) -> Self {
        let mut vocab = Self::default();
        for (text, id) in specials.pairs() {
            vocab.insert_fixed(Symbol::from(text), id);
        }
        vocab.next_id = specials.max_id() + 1;
        vocab
    }

    /// Rebuild a vocabulary from a loaded ``{ symbol -> id }`` map.
    ///
    /// The next free id is one greater than the largest id present, so
    /// training resumed after a load cannot collide with loaded ids.
    pub fn from_symbol_map(symbol_to_id: SymbolToIdMap) -> Self {
        let id_to_symbol: IdToSymbolMap = symbol_to_id
            .iter()
            .map(|(symbol, &id)| (id, symbol.clone()))
            .collect();
        let next_id = symbol_to_id.values().max().map_or(0, |&max| max + 1);
        Self {
            symbol_to_id,
            id_to_symbol,
            next_id,
        }
    }

    /// The number of symbols in the vocabulary.
    pub fn len(&self) -> usize {
        self.symbol_to_id.len()
    }

    /// Returns `true` if the vocabulary contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbol_to_id.is_empty()
    }

    /// Insert a symbol at the next free id, returning its id.
    ///
    /// Re-inserting a known symbol returns the existing id unchanged.
    pub fn insert(
        &mut self,
        symbol: Symbol,
    ) -> TokenId {
        if let Some(&id) = self.symbol_to_id.get(&symbol) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.id_to_symbol.insert(id, symbol.clone());
        self.symbol_to_id.insert(symbol, id);
        id
    }

    fn insert_fixed(
        &mut self,
        symbol: Symbol,
        id: TokenId,
    ) {
        self.id_to_symbol.insert(id, symbol.clone());
        self.symbol_to_id.insert(symbol, id);
    }

    /// The id for a symbol, if present.
    pub fn lookup_id(
        &self,
        symbol: &str,
    ) -> Option<TokenId> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// The symbol for an id, if present.
    pub fn lookup_symbol(
        &self,
        id: TokenId,
    ) -> Option<&Symbol> {
        self.id_to_symbol.get(&id)
    }

    /// The next id that will be assigned.
    pub fn next_id(&self) -> TokenId {
        self.next_id
    }

    /// Iterate over the ``(symbol, id)`` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &TokenId)> {
        self.symbol_to_id.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_specials() {
        let specials = SpecialTokens::default();
        let vocab = Vocabulary::seeded(&specials);

        assert_eq!(vocab.len(), 5);
        assert_eq!(vocab.lookup_id(UNKNOWN), Some(specials.unknown));
        assert_eq!(
            vocab.lookup_symbol(specials.end_of_text).unwrap().as_str(),
            END_OF_TEXT
        );
        assert_eq!(vocab.next_id(), specials.max_id() + 1);
    }

    #[test]
    fn test_insert_monotonic_ids() {
        let mut vocab = Vocabulary::seeded(&SpecialTokens::default());
        let first = vocab.insert(Symbol::from("a"));
        let second = vocab.insert(Symbol::from("b"));

        assert_eq!(second, first + 1);

        // Re-insertion neither reassigns nor burns an id.
        assert_eq!(vocab.insert(Symbol::from("a")), first);
        assert_eq!(vocab.next_id(), second + 1);
    }

    #[test]
    fn test_reverse_mapping_consistent() {
        let mut vocab = Vocabulary::seeded(&SpecialTokens::default());
        vocab.insert(Symbol::from("lo"));
        vocab.insert(Symbol::from("low"));

        for (symbol, &id) in vocab.iter() {
            assert_eq!(vocab.lookup_symbol(id), Some(symbol));
        }
    }

    #[test]
    fn test_from_symbol_map() {
        let mut map = SymbolToIdMap::default();
        map.insert(Symbol::from("a"), 7);
        map.insert(Symbol::from("b"), 3);

        let vocab = Vocabulary::from_symbol_map(map);
        assert_eq!(vocab.next_id(), 8);
        assert_eq!(vocab.lookup_symbol(3).unwrap().as_str(), "b");

        let empty = Vocabulary::from_symbol_map(SymbolToIdMap::default());
        assert_eq!(empty.next_id(), 0);
        assert!(empty.is_empty());
    }
}

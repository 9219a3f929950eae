//! # Corpus Model

use crate::config::Granularity;
use crate::types::{Count, Symbol};
use ahash::AHashMap;
use std::collections::BTreeSet;

/// The end-of-word marker appended to every word's symbol sequence.
///
/// The marker is a lexical boundary: no merge pair may contain it on either
/// side, and every word sequence carries exactly one, at the end.
pub const END_OF_WORD: &str = "</w>";

/// A frequency-counted word as an ordered symbol sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The symbol sequence; always ends with the end-of-word marker.
    pub symbols: Vec<Symbol>,

    /// Occurrences of the word in the corpus.
    pub count: Count,
}

/// In-memory model of the training corpus as word frequency entries.
#[derive(Debug, Clone, Default)]
pub struct CorpusModel {
    /// The collapsed word entries.
    pub entries: Vec<WordEntry>,
}

impl CorpusModel {
    /// Build the corpus model from cleaned text.
    ///
    /// Splits on whitespace; identical symbol sequences collapse into a
    /// single entry with a summed count. Entry order carries no meaning and
    /// never influences training decisions.
    pub fn from_text(
        cleaned: &str,
        granularity: Granularity,
    ) -> Self {
        let mut counts: AHashMap<Vec<Symbol>, Count> = AHashMap::new();
        for word in cleaned.split_whitespace() {
            *counts.entry(word_symbols(word, granularity)).or_default() += 1;
        }

        let entries = counts
            .into_iter()
            .map(|(symbols, count)| WordEntry { symbols, count })
            .collect();
        Self { entries }
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the corpus contains no words.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct base symbols of the corpus, ascending by code point.
    ///
    /// Only meaningful before any merge has rewritten the entries.
    pub fn sorted_base_symbols(&self) -> Vec<Symbol> {
        let mut symbols: BTreeSet<Symbol> = BTreeSet::new();
        for entry in &self.entries {
            for symbol in &entry.symbols {
                if symbol.as_str() != END_OF_WORD {
                    symbols.insert(symbol.clone());
                }
            }
        }
        symbols.into_iter().collect()
    }
}

/// Split a word into base units plus the end-of-word marker.
pub fn word_symbols(
    word: &str,
    granularity: Granularity,
) -> Vec<Symbol> {
    let mut symbols = base_units(word, granularity);
    symbols.push(Symbol::from(END_OF_WORD));
    symbols
}

/// Split a word into base units without the end-of-word marker.
pub fn base_units(
    word: &str,
    granularity: Granularity,
) -> Vec<Symbol> {
    match granularity {
        Granularity::Char => word.chars().map(symbol_from_char).collect(),
        Granularity::Byte => word
            .bytes()
            .map(|b| symbol_from_char(char::from(b)))
            .collect(),
    }
}

fn symbol_from_char(ch: char) -> Symbol {
    let mut symbol = Symbol::default();
    symbol.push(ch);
    symbol
}

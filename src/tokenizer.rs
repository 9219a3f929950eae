//! # BPE Tokenizer

use crate::config::TokenizerConfig;
use crate::corpus::{base_units, word_symbols, CorpusModel, END_OF_WORD};
use crate::merges::MergeTable;
use crate::normalize::clean;
use crate::training::MergeTrainer;
use crate::types::{merged_symbol, Symbol, TokenId};
use crate::vocab::{io, Vocabulary};

/// Subword tokenizer over a learned vocabulary and merge table.
///
/// A fresh tokenizer carries only the configured special tokens; [`train`]
/// or [`load`] populate the learned state. After either, the vocabulary and
/// merge table are only ever read by [`encode`] and [`decode`].
///
/// [`train`]: Tokenizer::train
/// [`load`]: Tokenizer::load
/// [`encode`]: Tokenizer::encode
/// [`decode`]: Tokenizer::decode
pub struct Tokenizer {
    config: TokenizerConfig,
    vocab: Vocabulary,
    merges: MergeTable,
}

impl Tokenizer {
    /// Create an untrained tokenizer.
    pub fn new(config: TokenizerConfig) -> Self {
        let vocab = Vocabulary::seeded(&config.special_tokens);
        Self {
            config,
            vocab,
            merges: MergeTable::default(),
        }
    }

    /// The tokenizer configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The current vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// The learned merge table.
    pub fn merges(&self) -> &MergeTable {
        &self.merges
    }

    /// Learn a vocabulary and merge table from raw training text.
    ///
    /// Text is cleaned first; input with nothing left after cleaning logs a
    /// warning and leaves the tokenizer unchanged.
    pub fn train(
        &mut self,
        text: &str,
    ) {
        let cleaned = clean(text);
        if cleaned.is_empty() {
            log::warn!("no usable text to train on");
            return;
        }

        let corpus = CorpusModel::from_text(&cleaned, self.config.granularity);
        MergeTrainer::new(&self.config, corpus, &mut self.vocab, &mut self.merges).train();
    }

    /// Encode text into token ids.
    ///
    /// With `include_boundaries`, the sequence is wrapped in the
    /// start-of-text and end-of-text ids (even when nothing survives
    /// cleaning). Unknown content degrades to the unknown-token id; this
    /// never fails.
    pub fn encode(
        &self,
        text: &str,
        include_boundaries: bool,
    ) -> Vec<TokenId> {
        let cleaned = clean(text);

        let mut ids = Vec::new();
        if include_boundaries {
            ids.push(self.config.special_tokens.start_of_text);
        }

        for word in cleaned.split_whitespace() {
            for symbol in self.merge_word(word) {
                self.append_symbol_ids(&symbol, &mut ids);
            }
        }

        if include_boundaries {
            ids.push(self.config.special_tokens.end_of_text);
        }
        ids
    }

    /// Reduce a word's symbol sequence under the merge table.
    ///
    /// Each step applies the lowest-ranked merge present anywhere in the
    /// sequence, taking the first occurrence when a rank repeats, then
    /// rescans. Stops once no adjacent pair has a rank.
    fn merge_word(
        &self,
        word: &str,
    ) -> Vec<Symbol> {
        let mut symbols = word_symbols(word, self.config.granularity);

        loop {
            let mut lowest: Option<(usize, usize)> = None;
            for (pos, window) in symbols.windows(2).enumerate() {
                if let Some(rank) = self.merges.rank(&window[0], &window[1]) {
                    if lowest.map_or(true, |(best, _)| rank < best) {
                        lowest = Some((rank, pos));
                    }
                }
            }

            let Some((_, pos)) = lowest else {
                break;
            };
            symbols[pos] = merged_symbol(&symbols[pos], &symbols[pos + 1]);
            symbols.remove(pos + 1);
        }

        symbols
    }

    /// Append the id for one symbol, falling back to base units when the
    /// symbol is absent from the vocabulary.
    ///
    /// The fallback substitutes the unknown id once per missing base unit,
    /// never once per word.
    fn append_symbol_ids(
        &self,
        symbol: &Symbol,
        ids: &mut Vec<TokenId>,
    ) {
        if let Some(id) = self.vocab.lookup_id(symbol) {
            ids.push(id);
            return;
        }

        for unit in base_units(symbol, self.config.granularity) {
            match self.vocab.lookup_id(&unit) {
                Some(id) => ids.push(id),
                None => ids.push(self.config.special_tokens.unknown),
            }
        }
    }

    /// Decode token ids back into text.
    ///
    /// The end-of-text id truncates the sequence; the remaining special ids
    /// are skipped; the end-of-word marker becomes a space. Ids that map to
    /// nothing are dropped rather than surfaced as placeholder text, so
    /// reconstructed words stay intact. The result is trimmed.
    pub fn decode(
        &self,
        ids: &[TokenId],
    ) -> String {
        let specials = &self.config.special_tokens;

        let mut out = String::new();
        for &id in ids {
            if id == specials.end_of_text {
                break;
            }
            if id == specials.start_of_text
                || id == specials.padding
                || id == specials.mask
                || id == specials.unknown
            {
                continue;
            }

            match self.vocab.lookup_symbol(id) {
                Some(symbol) if symbol.as_str() == END_OF_WORD => out.push(' '),
                Some(symbol) => out.push_str(symbol),
                None => {}
            }
        }

        out.trim().to_string()
    }

    /// Persist the vocabulary and merge table under the configured output
    /// directory.
    pub fn save(&self) -> anyhow::Result<()> {
        io::save_artifacts(
            &self.vocab,
            &self.merges,
            &self.config.vocab_path(),
            &self.config.merges_path(),
        )
    }

    /// Restore the vocabulary and merge table from saved artifacts.
    ///
    /// Returns `Ok(false)` without touching state when either artifact is
    /// missing; further training after a successful load allocates ids
    /// above everything loaded.
    pub fn load(&mut self) -> anyhow::Result<bool> {
        let Some((vocab, merges)) =
            io::load_artifacts(&self.config.vocab_path(), &self.config.merges_path())?
        else {
            return Ok(false);
        };

        self.vocab = vocab;
        self.merges = merges;
        Ok(true)
    }
}

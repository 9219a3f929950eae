//! # Merge Trainer

use crate::config::TokenizerConfig;
use crate::corpus::{CorpusModel, END_OF_WORD};
use crate::merges::MergeTable;
use crate::types::{merged_symbol, Count, Pair, PairCountMap, Symbol};
use crate::vocab::Vocabulary;

/// Greedy pair-merge trainer.
///
/// Exclusively owns the corpus entries and mutably borrows the vocabulary
/// and merge table for the duration of a run; both are frozen once [`train`]
/// returns.
///
/// [`train`]: MergeTrainer::train
pub struct MergeTrainer<'a> {
    config: &'a TokenizerConfig,
    corpus: CorpusModel,
    vocab: &'a mut Vocabulary,
    merges: &'a mut MergeTable,
}

impl<'a> MergeTrainer<'a> {
    /// Create a trainer over a prepared corpus.
    pub fn new(
        config: &'a TokenizerConfig,
        corpus: CorpusModel,
        vocab: &'a mut Vocabulary,
        merges: &'a mut MergeTable,
    ) -> Self {
        Self {
            config,
            corpus,
            vocab,
            merges,
        }
    }

    /// Run the merge loop to termination.
    ///
    /// Seeds the vocabulary, then alternates pair selection and corpus
    /// rewriting until no candidate pair remains, the vocabulary reaches the
    /// configured target size, or the best pair falls below the minimum
    /// frequency.
    pub fn train(mut self) {
        self.seed_vocabulary();

        log::info!(
            "starting BPE training with {} unique words",
            self.corpus.len()
        );

        let mut merges_done = 0usize;
        while self.vocab.len() < self.config.vocab_size {
            let Some((pair, count)) = self.select_pair() else {
                break;
            };
            if count < self.config.min_frequency {
                break;
            }

            self.apply_merge(&pair);
            self.vocab.insert(merged_symbol(&pair.0, &pair.1));
            // A pair can only reappear when training resumes on new text;
            // its rank stays the one it was first learned at.
            if self.merges.rank(&pair.0, &pair.1).is_none() {
                self.merges.push(pair);
            }

            merges_done += 1;
            if merges_done % 100 == 0 {
                log::info!(
                    "merges: {merges_done}, vocab size: {}",
                    self.vocab.len()
                );
            }
        }

        log::info!(
            "training finished: {merges_done} merges, {} symbols",
            self.vocab.len()
        );
    }

    /// Seed the end-of-word marker and the corpus base symbols.
    ///
    /// Special tokens are already present (the vocabulary is seeded with
    /// them at construction). Each new symbol takes the next free id; base
    /// symbols arrive in ascending code-point order.
    fn seed_vocabulary(&mut self) {
        self.vocab.insert(Symbol::from(END_OF_WORD));
        for symbol in self.corpus.sorted_base_symbols() {
            self.vocab.insert(symbol);
        }
    }

    /// Count every adjacent pair not touching the end-of-word marker and
    /// pick the winner.
    ///
    /// Highest weighted count wins; ties break to the lexicographically
    /// smallest pair, so selection never depends on map iteration order.
    fn select_pair(&self) -> Option<(Pair, Count)> {
        let mut counts = PairCountMap::default();
        for entry in &self.corpus.entries {
            for window in entry.symbols.windows(2) {
                if window[0].as_str() == END_OF_WORD || window[1].as_str() == END_OF_WORD {
                    continue;
                }
                *counts
                    .entry((window[0].clone(), window[1].clone()))
                    .or_default() += entry.count;
            }
        }

        let mut best: Option<(Pair, Count)> = None;
        for (pair, count) in counts {
            let better = match &best {
                None => true,
                Some((best_pair, best_count)) => {
                    count > *best_count || (count == *best_count && pair < *best_pair)
                }
            };
            if better {
                best = Some((pair, count));
            }
        }
        best
    }

    /// Rewrite every word entry, replacing each non-overlapping
    /// left-to-right occurrence of `pair` with its merged symbol.
    fn apply_merge(
        &mut self,
        pair: &Pair,
    ) {
        let merged = merged_symbol(&pair.0, &pair.1);
        for entry in &mut self.corpus.entries {
            let occurs = entry
                .symbols
                .windows(2)
                .any(|w| w[0] == pair.0 && w[1] == pair.1);
            if !occurs {
                continue;
            }

            let mut rewritten = Vec::with_capacity(entry.symbols.len());
            let mut i = 0;
            while i < entry.symbols.len() {
                if i + 1 < entry.symbols.len()
                    && entry.symbols[i] == pair.0
                    && entry.symbols[i + 1] == pair.1
                {
                    rewritten.push(merged.clone());
                    i += 2;
                } else {
                    rewritten.push(entry.symbols[i].clone());
                    i += 1;
                }
            }
            entry.symbols = rewritten;
        }
    }
}

//! # Tokenizer Configuration

use crate::types::Count;
use crate::vocab::SpecialTokens;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the vocabulary artifact inside the output directory.
pub const VOCAB_FILE: &str = "vocab.json";

/// Name of the merge-table artifact inside the output directory.
pub const MERGES_FILE: &str = "merges.txt";

/// Base unit granularity used when splitting words into symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    /// One symbol per character.
    #[default]
    Char,

    /// One symbol per UTF-8 byte, rendered as the code point of equal value.
    Byte,
}

/// Options for a [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Inclusive upper bound on the vocabulary size after training.
    pub vocab_size: usize,

    /// Inclusive lower bound on the corpus frequency of a merged pair.
    pub min_frequency: Count,

    /// Directory the vocabulary and merge artifacts are written to.
    pub output_dir: PathBuf,

    /// Base unit granularity.
    pub granularity: Granularity,

    /// Reserved special tokens and their fixed ids.
    pub special_tokens: SpecialTokens,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: 10_000,
            min_frequency: 2,
            output_dir: PathBuf::from("data/output"),
            granularity: Granularity::default(),
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration with the given target vocabulary size.
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            ..Self::default()
        }
    }

    /// Sets the target vocabulary size.
    pub fn with_vocab_size(
        self,
        vocab_size: usize,
    ) -> Self {
        Self { vocab_size, ..self }
    }

    /// Sets the minimum merge frequency.
    pub fn with_min_frequency(
        self,
        min_frequency: Count,
    ) -> Self {
        Self {
            min_frequency,
            ..self
        }
    }

    /// Sets the artifact output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(
        self,
        output_dir: P,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self
        }
    }

    /// Sets the base unit granularity.
    pub fn with_granularity(
        self,
        granularity: Granularity,
    ) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    /// Replaces the special token set.
    pub fn with_special_tokens(
        self,
        special_tokens: SpecialTokens,
    ) -> Self {
        Self {
            special_tokens,
            ..self
        }
    }

    /// Path of the vocabulary artifact.
    pub fn vocab_path(&self) -> PathBuf {
        self.output_dir.join(VOCAB_FILE)
    }

    /// Path of the merge-table artifact.
    pub fn merges_path(&self) -> PathBuf {
        self.output_dir.join(MERGES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = TokenizerConfig::new(500)
            .with_min_frequency(1)
            .with_granularity(Granularity::Byte)
            .with_output_dir("model/tok");

        assert_eq!(config.vocab_size, 500);
        assert_eq!(config.min_frequency, 1);
        assert_eq!(config.granularity, Granularity::Byte);
        assert_eq!(config.vocab_path(), PathBuf::from("model/tok/vocab.json"));
        assert_eq!(config.merges_path(), PathBuf::from("model/tok/merges.txt"));
    }
}

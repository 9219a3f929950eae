//! # wordtok
//!
//! Word-level byte-pair-encoding tokenizer.
//!
//! Raw text is normalized ([`normalize::clean`]), split into words, and
//! modeled as frequency-counted symbol sequences ending in an end-of-word
//! marker. Training greedily merges the most frequent adjacent symbol pair,
//! growing a [`vocab::Vocabulary`] and an ordered [`merges::MergeTable`];
//! encoding replays those merges by rank on new text, and decoding maps ids
//! back to symbols. The learned state round-trips through two human-readable
//! artifacts, `vocab.json` and `merges.txt`.
//!
//! # Example
//!
//! ```rust,ignore
//! let config = TokenizerConfig::new(10_000)
//!     .with_min_frequency(2)
//!     .with_output_dir("data/output");
//!
//! let mut tokenizer = Tokenizer::new(config);
//! tokenizer.train(&corpus_text);
//! tokenizer.save()?;
//!
//! let ids = tokenizer.encode("hi hello", true);
//! let text = tokenizer.decode(&ids);
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod corpus;
pub mod merges;
pub mod normalize;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

pub use config::{Granularity, TokenizerConfig};
pub use tokenizer::Tokenizer;
pub use vocab::SpecialTokens;

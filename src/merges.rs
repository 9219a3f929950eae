//! # Ordered Merge Table

use crate::types::{Pair, PairRankMap, Symbol};

/// The ordered list of learned merge rules and their rank index.
///
/// Rank is the 0-based position a rule was learned at. Lower rank means
/// higher priority at encode time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeTable {
    rules: Vec<Pair>,
    ranks: PairRankMap,
}

impl MergeTable {
    /// Rebuild a table from rules in rank order.
    pub fn from_rules(rules: Vec<Pair>) -> Self {
        let ranks = rules
            .iter()
            .enumerate()
            .map(|(rank, pair)| (pair.clone(), rank))
            .collect();
        Self { rules, ranks }
    }

    /// The number of learned rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rules have been learned.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a rule at the next rank, returning that rank.
    pub fn push(
        &mut self,
        pair: Pair,
    ) -> usize {
        let rank = self.rules.len();
        self.ranks.insert(pair.clone(), rank);
        self.rules.push(pair);
        rank
    }

    /// The rank of a pair, if it was learned.
    pub fn rank(
        &self,
        left: &Symbol,
        right: &Symbol,
    ) -> Option<usize> {
        self.ranks.get(&(left.clone(), right.clone())).copied()
    }

    /// Iterate over the rules in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.rules.iter()
    }
}

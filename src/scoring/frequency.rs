//! Document-wide term-occurrence counts.

use rustc_hash::FxHashMap;

use crate::types::{Document, Sentence};

/// Global occurrence count for every token across the whole document.
///
/// Counts are over token occurrences, not distinct-per-sentence presence:
/// a token appearing three times in one sentence contributes three.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl TermFrequencyTable {
    /// Count every token occurrence in the document.
    pub fn build(doc: &Document) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for sentence in doc.sentences() {
            for token in &sentence.tokens {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Global occurrence count for a token (0 if unseen).
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of global counts over every token occurrence in the sentence.
    ///
    /// Duplicates count multiple times; there is no set-deduplication.
    pub fn sentence_score(&self, sentence: &Sentence) -> u64 {
        sentence.tokens.iter().map(|t| self.count(t)).sum()
    }

    /// Number of distinct tokens seen.
    pub fn num_terms(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

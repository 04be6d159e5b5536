//! Frequency-based ranking.
//!
//! A sentence scores the sum of the document-wide occurrence counts of its
//! tokens, every occurrence counted. Sentences dense in globally common
//! tokens rise to the top.

use crate::scoring::frequency::TermFrequencyTable;
use crate::strategies::select_descending;
use crate::types::Document;

/// Rank sentence indices by descending global-frequency score.
pub fn rank(doc: &Document, target: usize) -> Vec<usize> {
    let table = TermFrequencyTable::build(doc);
    let scores: Vec<f64> = doc
        .sentences()
        .iter()
        .map(|s| table.sentence_score(s) as f64)
        .collect();
    select_descending(&scores, target)
}

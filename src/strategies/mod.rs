//! Ranking strategies and the shared selection policy.
//!
//! Every strategy consumes a tokenized [`Document`] and a target sentence
//! count and produces an ordered selection of sentence indices. The policy
//! shared by all of them:
//!
//! - `target = max(1, total * ratio / 100)`
//! - documents of one sentence or fewer come back unchanged, before any
//!   ratio arithmetic
//! - a target covering the whole document short-circuits to the original
//!   order with no scoring at all
//!
//! Score-ranked strategies emit sentences in descending-score order, not
//! document order; equal scores keep their document order relative to each
//! other (stable sort). Only the position strategy preserves input order.

pub mod frequency;
pub mod position;
pub mod textrank;
pub mod tfidf;

use tracing::debug;

use crate::types::Document;

/// The four deterministic extractive strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractiveStrategy {
    Frequency,
    TfIdf,
    TextRank,
    Position,
}

/// Number of sentences to keep for a compression ratio in percent.
///
/// Floors at 1, so a ratio of 0 never yields an empty selection (or a
/// division blow-up).
pub fn target_count(total_sentences: usize, compression_ratio: u32) -> usize {
    ((total_sentences * compression_ratio as usize) / 100).max(1)
}

/// Indices of the `target` best scores, descending, stable on ties.
pub(crate) fn select_descending(scores: &[f64], target: usize) -> Vec<usize> {
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    // Stable sort: equal-score sentences keep document order.
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    indexed.truncate(target);
    indexed.into_iter().map(|(i, _)| i).collect()
}

/// Run one extractive strategy under the shared compression policy.
pub fn summarize(doc: &Document, strategy: ExtractiveStrategy, compression_ratio: u32) -> String {
    // Sole sentence (or nothing): return unchanged, no ratio arithmetic.
    if doc.len() <= 1 {
        return doc.join_all();
    }

    let total = doc.len();
    let target = target_count(total, compression_ratio);
    if target >= total {
        // No compression happens; skip scoring so the order never changes.
        return doc.join_all();
    }

    let indices = match strategy {
        ExtractiveStrategy::Frequency => frequency::rank(doc, target),
        ExtractiveStrategy::TfIdf => tfidf::rank(doc, target),
        ExtractiveStrategy::TextRank => match textrank::rank(doc, target) {
            textrank::RankOutcome::Scored(indices) => indices,
            textrank::RankOutcome::PositionFallback(indices) => {
                debug!(sentences = total, "similarity graph has no edges; ranking by position");
                indices
            }
        },
        ExtractiveStrategy::Position => position::rank(doc, target),
    };

    doc.join_indices(&indices)
}

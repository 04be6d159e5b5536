//! Graph-centrality (TextRank) ranking.
//!
//! Sentences are ranked by weighted PageRank over the similarity graph.
//! A graph with no edges leaves centrality undefined, so that case degrades
//! to position order — an expected outcome, modeled as a variant rather
//! than an error.

use crate::graph::SentenceGraph;
use crate::pagerank::PageRank;
use crate::strategies::{position, select_descending};
use crate::types::Document;

/// How a TextRank ranking was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// Centrality scores ranked the sentences.
    Scored(Vec<usize>),
    /// The graph had no edges; indices follow the position policy.
    PositionFallback(Vec<usize>),
}

impl RankOutcome {
    /// The selected indices, however they were produced.
    pub fn into_indices(self) -> Vec<usize> {
        match self {
            RankOutcome::Scored(indices) | RankOutcome::PositionFallback(indices) => indices,
        }
    }
}

/// Rank sentence indices by descending PageRank centrality.
pub fn rank(doc: &Document, target: usize) -> RankOutcome {
    let graph = SentenceGraph::build(doc);
    if graph.num_edges() == 0 {
        return RankOutcome::PositionFallback(position::rank(doc, target));
    }

    let centrality = PageRank::new().run(&graph);
    RankOutcome::Scored(select_descending(&centrality.scores, target))
}

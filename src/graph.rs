//! Sentence-similarity graph.
//!
//! One node per sentence, kept even when isolated. An undirected edge
//! joins two sentences iff their distinct-token sets share at least one
//! token; the weight is the size of that intersection. No self-loops.
//!
//! Stored in compressed sparse row form: PageRank's power iteration spends
//! all its time walking neighbors, and CSR keeps them contiguous.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::types::Document;

/// Pairwise overlap is quadratic in sentences; below this count the
/// sequential build wins.
const PARALLEL_THRESHOLD: usize = 64;

/// CSR adjacency over sentence indices with overlap-count edge weights.
#[derive(Debug, Clone)]
pub struct SentenceGraph {
    num_nodes: usize,
    /// Node i's edges live at `col_idx[row_ptr[i]..row_ptr[i + 1]]`.
    row_ptr: Vec<usize>,
    col_idx: Vec<u32>,
    weights: Vec<f64>,
    /// Total incident weight per node.
    total_weight: Vec<f64>,
}

impl SentenceGraph {
    /// Build the similarity graph for a document.
    pub fn build(doc: &Document) -> Self {
        let n = doc.len();
        let distinct: Vec<FxHashSet<&str>> = doc
            .sentences()
            .iter()
            .map(|s| s.tokens.iter().map(String::as_str).collect())
            .collect();

        let overlap = |i: usize, j: usize| -> usize {
            // Scan the smaller set against the larger one.
            let (small, large) = if distinct[i].len() <= distinct[j].len() {
                (&distinct[i], &distinct[j])
            } else {
                (&distinct[j], &distinct[i])
            };
            small.iter().filter(|t| large.contains(*t)).count()
        };

        let pairs: Vec<(usize, usize, f64)> = if n < PARALLEL_THRESHOLD {
            let mut pairs = Vec::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    let w = overlap(i, j);
                    if w > 0 {
                        pairs.push((i, j, w as f64));
                    }
                }
            }
            pairs
        } else {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| {
                    ((i + 1)..n).filter_map(move |j| {
                        let w = overlap(i, j);
                        (w > 0).then(|| (i, j, w as f64))
                    })
                })
                .collect()
        };

        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); n];
        for &(i, j, w) in &pairs {
            adjacency[i].push((j as u32, w));
            adjacency[j].push((i as u32, w));
        }

        let mut row_ptr = Vec::with_capacity(n + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(n);
        row_ptr.push(0);

        for mut edges in adjacency {
            // Neighbor order is deterministic either way; sorting keeps the
            // layout independent of how the pair list was produced.
            edges.sort_by_key(|&(target, _)| target);
            total_weight.push(edges.iter().map(|(_, w)| w).sum());
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes: n,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over `(neighbor, weight)` pairs of a node.
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Total incident weight of a node.
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of undirected edges (each counted once).
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Nodes with no incident weight.
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] == 0.0)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }
}

impl Default for SentenceGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn make_doc(sentences: &[&[&str]]) -> Document {
        Document::new(
            sentences
                .iter()
                .enumerate()
                .map(|(i, tokens)| {
                    Sentence::new(
                        i,
                        tokens.join(" "),
                        tokens.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_edge_weight_is_distinct_overlap() {
        // "deep" and "learning" shared; duplicate "learning" must not
        // inflate the weight.
        let doc = make_doc(&[
            &["deep", "learning", "learning", "works"],
            &["deep", "learning", "scales"],
        ]);
        let graph = SentenceGraph::build(&doc);

        assert_eq!(graph.num_edges(), 1);
        let edges: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(edges, vec![(1, 2.0)]);
    }

    #[test]
    fn test_disjoint_sentences_share_no_edge() {
        let doc = make_doc(&[&["alpha", "beta"], &["gamma", "delta"]]);
        let graph = SentenceGraph::build(&doc);

        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.isolated_nodes(), vec![0, 1]);
    }

    #[test]
    fn test_isolated_node_kept_alongside_connected_pair() {
        let doc = make_doc(&[
            &["shared", "one"],
            &["shared", "two"],
            &["lonely"],
        ]);
        let graph = SentenceGraph::build(&doc);

        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.isolated_nodes(), vec![2]);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let doc = make_doc(&[
            &["a", "b", "c"],
            &["b", "c", "d"],
            &["c", "d", "e"],
        ]);
        let graph = SentenceGraph::build(&doc);

        for node in 0..graph.num_nodes() as u32 {
            for (neighbor, weight) in graph.neighbors(node) {
                let back = graph
                    .neighbors(neighbor)
                    .find(|&(n, _)| n == node)
                    .expect("missing reverse edge");
                assert_eq!(back.1, weight);
            }
        }
    }

    #[test]
    fn test_no_self_loops() {
        let doc = make_doc(&[&["same", "same"], &["same"]]);
        let graph = SentenceGraph::build(&doc);

        for node in 0..graph.num_nodes() as u32 {
            assert!(graph.neighbors(node).all(|(n, _)| n != node));
        }
    }

    #[test]
    fn test_total_weight_sums_incident_edges() {
        let doc = make_doc(&[
            &["a", "b"],
            &["a", "c"],
            &["a", "b", "c"],
        ]);
        let graph = SentenceGraph::build(&doc);

        // Node 2 overlaps node 0 on {a, b} and node 1 on {a, c}.
        assert_eq!(graph.node_total_weight(2), 4.0);
    }

    #[test]
    fn test_empty_document() {
        let graph = SentenceGraph::build(&Document::default());
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_parallel_build_matches_sequential_shape() {
        // Chain of 80 sentences, each sharing one token with the next, so
        // the parallel path is taken and the result is easy to predict.
        let tokens: Vec<Vec<String>> = (0..80)
            .map(|i| vec![format!("t{i}"), format!("t{}", i + 1)])
            .collect();
        let doc = Document::new(
            tokens
                .iter()
                .enumerate()
                .map(|(i, t)| Sentence::new(i, format!("s{i}"), t.clone()))
                .collect(),
        );
        let graph = SentenceGraph::build(&doc);

        assert_eq!(graph.num_nodes(), 80);
        assert_eq!(graph.num_edges(), 79);
        // Interior nodes touch both neighbors with weight 1.
        assert_eq!(graph.node_total_weight(40), 2.0);
    }
}

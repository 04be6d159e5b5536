//! Weighted PageRank over the sentence-similarity graph.
//!
//! Power iteration with the standard teleport term. A node distributes its
//! score to neighbors in proportion to edge weight over its total incident
//! weight; mass held by nodes with no incident weight is redistributed
//! uniformly each round.

use crate::graph::SentenceGraph;

/// PageRank configuration.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor.
    pub damping: f64,
    /// Iteration cap; the result reports whether it was hit.
    pub max_iterations: usize,
    /// L1 convergence threshold between successive score vectors.
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

/// Outcome of a centrality computation.
#[derive(Debug, Clone)]
pub struct CentralityScores {
    /// One score per sentence index; sums to 1 on non-empty graphs.
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Final L1 difference between the last two iterations.
    pub delta: f64,
    pub converged: bool,
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run power iteration to (or past) convergence.
    ///
    /// Returns scores even when the iteration cap is hit, with
    /// `converged = false`.
    pub fn run(&self, graph: &SentenceGraph) -> CentralityScores {
        let n = graph.num_nodes();
        if n == 0 {
            return CentralityScores {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let uniform = 1.0 / n as f64;
        let teleport = (1.0 - self.damping) * uniform;
        let dangling = graph.isolated_nodes();

        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            next.fill(teleport + self.damping * dangling_mass * uniform);

            for (node, &score) in scores.iter().enumerate() {
                let out_weight = graph.node_total_weight(node as u32);
                if out_weight > 0.0 {
                    let scale = self.damping * score / out_weight;
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        next[neighbor as usize] += scale * weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        // Guard the invariant against accumulated rounding.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        CentralityScores {
            scores,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }
}

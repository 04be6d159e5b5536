//! Tf-idf weighting over the sentence corpus.
//!
//! Each sentence is a sparse row over the document vocabulary. Weights are
//! raw term frequency times smoothed inverse document frequency,
//! `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, and each row is L2-normalized
//! after weighting so row sums are comparable across sentence lengths.

use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{Document, Sentence};

/// Below this many sentences the parallel row build costs more than it saves.
const PARALLEL_THRESHOLD: usize = 128;

/// One sparse L2-normalized tf-idf row per sentence.
#[derive(Debug, Clone, Default)]
pub struct TfidfMatrix {
    num_terms: usize,
    rows: Vec<Vec<(u32, f64)>>,
}

impl TfidfMatrix {
    /// Weight every sentence against the document vocabulary.
    pub fn build(doc: &Document) -> Self {
        let n = doc.len();
        if n == 0 {
            return Self::default();
        }

        // Vocabulary ids in encounter order, so the matrix layout is
        // deterministic across runs.
        let mut vocab: FxHashMap<&str, u32> = FxHashMap::default();
        for sentence in doc.sentences() {
            for token in &sentence.tokens {
                let next_id = vocab.len() as u32;
                vocab.entry(token.as_str()).or_insert(next_id);
            }
        }

        // Document frequency counts distinct presence per sentence.
        let mut df = vec![0u32; vocab.len()];
        for sentence in doc.sentences() {
            let distinct: FxHashSet<u32> = sentence
                .tokens
                .iter()
                .map(|t| vocab[t.as_str()])
                .collect();
            for id in distinct {
                df[id as usize] += 1;
            }
        }

        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n as f64) / (1.0 + f64::from(d))).ln() + 1.0)
            .collect();

        let build_row = |sentence: &Sentence| -> Vec<(u32, f64)> {
            let mut tf: FxHashMap<u32, f64> = FxHashMap::default();
            for token in &sentence.tokens {
                *tf.entry(vocab[token.as_str()]).or_insert(0.0) += 1.0;
            }

            let mut row: Vec<(u32, f64)> = tf
                .into_iter()
                .map(|(id, count)| (id, count * idf[id as usize]))
                .collect();
            // Sort by term id for deterministic iteration.
            row.sort_by_key(|&(id, _)| id);

            let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, w) in &mut row {
                    *w /= norm;
                }
            }
            row
        };

        let rows: Vec<Vec<(u32, f64)>> = if n < PARALLEL_THRESHOLD {
            doc.sentences().iter().map(build_row).collect()
        } else {
            doc.sentences().par_iter().map(build_row).collect()
        };

        Self {
            num_terms: vocab.len(),
            rows,
        }
    }

    /// The sparse row for sentence `i`: `(term_id, weight)` pairs sorted by id.
    pub fn row(&self, i: usize) -> &[(u32, f64)] {
        &self.rows[i]
    }

    /// Sum of all weights in sentence `i`'s row.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.rows[i].iter().map(|(_, w)| w).sum()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_terms(&self) -> usize {
        self.num_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentence(index: usize, tokens: &[&str]) -> Sentence {
        Sentence::new(
            index,
            tokens.join(" "),
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn make_doc(sentences: &[&[&str]]) -> Document {
        Document::new(
            sentences
                .iter()
                .enumerate()
                .map(|(i, tokens)| make_sentence(i, tokens))
                .collect(),
        )
    }

    #[test]
    fn test_vocabulary_is_the_union_of_tokens() {
        let doc = make_doc(&[&["alpha", "beta"], &["beta", "gamma"]]);
        let matrix = TfidfMatrix::build(&doc);

        assert_eq!(matrix.num_terms(), 3);
        assert_eq!(matrix.num_rows(), 2);
    }

    #[test]
    fn test_smoothed_idf_formula() {
        // "shared" appears in both of 2 sentences, "rare" in one.
        let doc = make_doc(&[&["shared", "rare"], &["shared"]]);
        let matrix = TfidfMatrix::build(&doc);

        let idf_shared = (3.0f64 / 3.0).ln() + 1.0; // ln((1+2)/(1+2)) + 1
        let idf_rare = (3.0f64 / 2.0).ln() + 1.0; // ln((1+2)/(1+1)) + 1

        // Row 0 before normalization is [idf_shared, idf_rare].
        let norm = (idf_shared * idf_shared + idf_rare * idf_rare).sqrt();
        let row = matrix.row(0);
        assert_eq!(row.len(), 2);
        assert!((row[0].1 - idf_shared / norm).abs() < 1e-12);
        assert!((row[1].1 - idf_rare / norm).abs() < 1e-12);
    }

    #[test]
    fn test_rows_have_unit_norm() {
        let doc = make_doc(&[
            &["a", "b", "c"],
            &["a", "a", "d"],
            &["e"],
        ]);
        let matrix = TfidfMatrix::build(&doc);

        for i in 0..matrix.num_rows() {
            let norm: f64 = matrix.row(i).iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12, "row {i} norm was {norm}");
        }
    }

    #[test]
    fn test_term_frequency_scales_weight() {
        // Same vocabulary, one sentence repeats the distinctive term.
        let doc = make_doc(&[&["common", "term"], &["common", "term", "term"]]);
        let matrix = TfidfMatrix::build(&doc);

        // In row 1 "term" carries double the raw tf of "common", so after
        // normalization its weight must be strictly larger.
        let row = matrix.row(1);
        let common = row.iter().find(|(id, _)| *id == 0).unwrap().1;
        let term = row.iter().find(|(id, _)| *id == 1).unwrap().1;
        assert!(term > common);
    }

    #[test]
    fn test_row_entries_sorted_by_term_id() {
        let doc = make_doc(&[&["z", "a", "m", "z"]]);
        let matrix = TfidfMatrix::build(&doc);

        let ids: Vec<u32> = matrix.row(0).iter().map(|(id, _)| *id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_empty_document() {
        let matrix = TfidfMatrix::build(&Document::default());
        assert_eq!(matrix.num_rows(), 0);
        assert_eq!(matrix.num_terms(), 0);
    }

    #[test]
    fn test_deterministic_across_builds() {
        let doc = make_doc(&[&["x", "y"], &["y", "z"], &["z", "x"]]);
        let a = TfidfMatrix::build(&doc);
        let b = TfidfMatrix::build(&doc);

        for i in 0..a.num_rows() {
            assert_eq!(a.row(i), b.row(i));
        }
    }
}

//! Tf-idf ranking.
//!
//! A sentence scores the sum of its L2-normalized tf-idf row. Selection
//! and tie-breaking follow the shared descending-score policy.

use crate::scoring::tfidf::TfidfMatrix;
use crate::strategies::select_descending;
use crate::types::Document;

/// Rank sentence indices by descending tf-idf row sum.
pub fn rank(doc: &Document, target: usize) -> Vec<usize> {
    let matrix = TfidfMatrix::build(doc);
    let scores: Vec<f64> = (0..matrix.num_rows()).map(|i| matrix.row_sum(i)).collect();
    select_descending(&scores, target)
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
    fn test_returns_target_many_distinct_indices() {
        let doc = make_doc(&[
            &["alpha", "beta"],
            &["beta", "gamma"],
            &["gamma", "delta"],
            &["delta", "alpha"],
        ]);
        let selected = rank(&doc, 3);

        assert_eq!(selected.len(), 3);
        let mut unique = selected.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_varied_vocabulary_outranks_single_token() {
        // A row with several distinct terms sums higher than a unit row
        // with one term, since each row has unit L2 norm.
        let doc = make_doc(&[
            &["one"],
            &["spread", "across", "many", "terms"],
            &["one"],
        ]);
        let selected = rank(&doc, 1);
        assert_eq!(selected, vec![1]);
    }

    #[test]
    fn test_ties_keep_document_order() {
        let doc = make_doc(&[&["mirror"], &["mirror"], &["mirror"]]);
        assert_eq!(rank(&doc, 2), vec![0, 1]);
    }

    #[test]
    fn test_deterministic() {
        let doc = make_doc(&[
            &["kernel", "scheduler", "preempts"],
            &["scheduler", "queues", "tasks"],
            &["tasks", "block", "on", "io"],
        ]);
        let first = rank(&doc, 2);
        for _ in 0..3 {
            assert_eq!(rank(&doc, 2), first);
        }
    }
}

//! Position-based ranking.
//!
//! Keeps the first `target` sentences in document order. The only strategy
//! whose output order matches input order, and the designated fallback when
//! graph centrality is undefined.

use crate::types::Document;

/// The first `target` sentence indices, in document order.
pub fn rank(doc: &Document, target: usize) -> Vec<usize> {
    (0..target.min(doc.len())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn make_doc(n: usize) -> Document {
        Document::new(
            (0..n)
                .map(|i| Sentence::new(i, format!("s{i}"), vec![format!("t{i}")]))
                .collect(),
        )
    }

    #[test]
    fn test_prefix_in_order() {
        assert_eq!(rank(&make_doc(5), 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_target_capped_at_document_length() {
        assert_eq!(rank(&make_doc(2), 10), vec![0, 1]);
    }

    #[test]
    fn test_empty_document() {
        assert!(rank(&Document::default(), 3).is_empty());
    }
}

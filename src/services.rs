//! Contracts for the external collaborators the engine consumes.
//!
//! Segmentation, neural summarization, annotation, and content extraction
//! are capabilities loaded once at process start and injected into the
//! [`Summarizer`](crate::dispatcher::Summarizer) as shared handles. The
//! crate never implements them; it only defines the seams.
//!
//! All handles must be `Send + Sync` — they are read-only services shared
//! across concurrent requests.

use crate::error::BoxError;
use crate::types::{Entity, NeuralModel};

/// Sentence and word segmentation.
///
/// `tokenize_words` output is treated as case-preserving; the engine
/// lower-cases tokens itself before any counting.
pub trait SentenceTokenizer: Send + Sync {
    /// Split raw text into an ordered sequence of sentences.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    /// Split one sentence into an ordered sequence of word tokens.
    fn tokenize_words(&self, sentence: &str) -> Vec<String>;
}

/// Pretrained abstractive summarization service.
///
/// One handle routes all sub-models; the process behind it keeps the
/// loaded pipelines. Any error triggers the dispatcher's first-sentences
/// fallback and is never surfaced to the caller.
pub trait NeuralSummarizer: Send + Sync {
    fn summarize(
        &self,
        text: &str,
        model: NeuralModel,
        min_length: usize,
        max_length: usize,
    ) -> Result<String, BoxError>;
}

/// Named-entity recognition over the produced summary.
pub trait EntityAnnotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<Entity>, BoxError>;
}

/// Sentiment scoring over the source text.
pub trait SentimentAnnotator: Send + Sync {
    /// Compound sentiment score in `[-1, 1]`.
    fn score(&self, text: &str) -> Result<f64, BoxError>;
}

/// URL-to-plaintext content extraction.
pub trait ContentExtractor: Send + Sync {
    /// Fetch and extract readable plaintext, failing when none is found.
    fn extract(&self, url: &str) -> Result<String, BoxError>;
}

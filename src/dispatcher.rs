//! Request dispatch: algorithm resolution, ranking, and result assembly.
//!
//! [`Summarizer`] owns the external service handles, injected once at
//! construction. A request's algorithm identifier is resolved to the closed
//! [`Algorithm`] enum exactly once here; nothing downstream matches on
//! strings.
//!
//! Two degradations are deliberate and never surface as errors: a failing
//! neural service yields the leading sentences of the input, and an
//! edgeless similarity graph yields position order (handled inside
//! [`crate::strategies`]).

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SummarizeError;
use crate::services::{
    ContentExtractor, EntityAnnotator, NeuralSummarizer, SentenceTokenizer, SentimentAnnotator,
};
use crate::strategies::{self, ExtractiveStrategy};
use crate::types::{Algorithm, Document, Entity, NeuralModel, Sentiment, SummaryLength};

/// Inputs below this many whitespace-delimited tokens are too short to
/// usefully compress with the neural service.
const MIN_NEURAL_INPUT_TOKENS: usize = 30;

/// Leading sentences kept when the neural service fails.
const NEURAL_FALLBACK_SENTENCES: usize = 3;

/// A direct-text summarization request.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub algorithm: String,
    pub summary_length: String,
    pub compression_ratio: u32,
    #[serde(default)]
    pub recognize_entities: bool,
    #[serde(default)]
    pub analyze_sentiment: bool,
}

/// A URL-sourced summarization request.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeUrlRequest {
    pub url: String,
    pub algorithm: String,
    pub summary_length: String,
    pub compression_ratio: u32,
    #[serde(default)]
    pub recognize_entities: bool,
    #[serde(default)]
    pub analyze_sentiment: bool,
}

/// The assembled result payload. Optional annotations are omitted from
/// serialized output when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Summarization dispatcher holding the injected service handles.
pub struct Summarizer {
    tokenizer: Arc<dyn SentenceTokenizer>,
    neural: Arc<dyn NeuralSummarizer>,
    entities: Arc<dyn EntityAnnotator>,
    sentiment: Arc<dyn SentimentAnnotator>,
    extractor: Arc<dyn ContentExtractor>,
}

impl Summarizer {
    /// Construct with service handles loaded once at process start.
    pub fn new(
        tokenizer: Arc<dyn SentenceTokenizer>,
        neural: Arc<dyn NeuralSummarizer>,
        entities: Arc<dyn EntityAnnotator>,
        sentiment: Arc<dyn SentimentAnnotator>,
        extractor: Arc<dyn ContentExtractor>,
    ) -> Self {
        Self {
            tokenizer,
            neural,
            entities,
            sentiment,
            extractor,
        }
    }

    /// Summarize text and assemble the result payload.
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryResponse, SummarizeError> {
        let algorithm: Algorithm = request.algorithm.parse()?;
        let length = SummaryLength::parse_lenient(&request.summary_length);
        debug!(?algorithm, ratio = request.compression_ratio, "dispatching summarization");

        let summary = match extractive_strategy(algorithm) {
            Some(strategy) => {
                let doc = Document::from_text(&request.text, self.tokenizer.as_ref());
                strategies::summarize(&doc, strategy, request.compression_ratio)
            }
            None => {
                let model = algorithm.neural_model().unwrap_or(NeuralModel::Default);
                self.neural_summary(&request.text, model, length)
            }
        };

        let mut response = SummaryResponse {
            summary,
            entities: None,
            sentiment: None,
        };

        if request.recognize_entities {
            // Entities are recognized in the summary, not the source.
            let entities = self
                .entities
                .annotate(&response.summary)
                .map_err(|e| SummarizeError::operation("entity annotation", e))?;
            response.entities = Some(entities);
        }

        if request.analyze_sentiment {
            // Sentiment is scored over the original source text.
            let compound = self
                .sentiment
                .score(&request.text)
                .map_err(|e| SummarizeError::operation("sentiment analysis", e))?;
            response.sentiment = Some(Sentiment::from_compound(compound));
        }

        Ok(response)
    }

    /// Extract plaintext from a URL, then summarize it.
    pub fn summarize_url(
        &self,
        request: &SummarizeUrlRequest,
    ) -> Result<SummaryResponse, SummarizeError> {
        let text = self
            .extractor
            .extract(&request.url)
            .map_err(|e| SummarizeError::ExtractionFailed(e.to_string()))?;

        self.summarize(&SummarizeRequest {
            text,
            algorithm: request.algorithm.clone(),
            summary_length: request.summary_length.clone(),
            compression_ratio: request.compression_ratio,
            recognize_entities: request.recognize_entities,
            analyze_sentiment: request.analyze_sentiment,
        })
    }

    /// Delegate to the neural service, degrading to leading sentences on
    /// any failure.
    fn neural_summary(&self, text: &str, model: NeuralModel, length: SummaryLength) -> String {
        if text.split_whitespace().count() < MIN_NEURAL_INPUT_TOKENS {
            return text.to_string();
        }

        let budget = length.budget();
        match self.neural.summarize(text, model, budget.min, budget.max) {
            Ok(summary) => summary,
            Err(error) => {
                warn!(%error, ?model, "neural summarization failed; keeping leading sentences");
                let doc = Document::from_text(text, self.tokenizer.as_ref());
                doc.join_first(NEURAL_FALLBACK_SENTENCES)
            }
        }
    }
}

fn extractive_strategy(algorithm: Algorithm) -> Option<ExtractiveStrategy> {
    match algorithm {
        Algorithm::Frequency => Some(ExtractiveStrategy::Frequency),
        Algorithm::TfIdf => Some(ExtractiveStrategy::TfIdf),
        Algorithm::TextRank => Some(ExtractiveStrategy::TextRank),
        Algorithm::Position => Some(ExtractiveStrategy::Position),
        Algorithm::NeuralDefault | Algorithm::NeuralBart | Algorithm::NeuralT5 => None,
    }
}

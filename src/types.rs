//! Core data types: sentences, documents, and the request vocabulary.
//!
//! A [`Document`] is an ordered, immutable sequence of [`Sentence`]s.
//! Tokens are lower-cased at construction so every scoring strategy is
//! case-insensitive regardless of what the tokenizer produced; punctuation
//! tokens and duplicates are kept as-is (no stemming, no stopword removal).

use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;
use crate::services::SentenceTokenizer;

/// A single sentence with its position and normalized tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// 0-based position in the original document.
    pub index: usize,
    /// The sentence text as produced by segmentation.
    pub text: String,
    /// Lower-cased tokens in order, duplicates and punctuation included.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a sentence, lower-casing every token.
    pub fn new(index: usize, text: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            index,
            text: text.into(),
            tokens: tokens.into_iter().map(|t| t.to_lowercase()).collect(),
        }
    }
}

/// An ordered sequence of sentences. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Build a document from pre-segmented sentences.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Segment raw text into a document using the given tokenizer handle.
    pub fn from_text(text: &str, tokenizer: &dyn SentenceTokenizer) -> Self {
        let sentences = tokenizer
            .split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = tokenizer.tokenize_words(&text);
                Sentence::new(index, text, tokens)
            })
            .collect();
        Self { sentences }
    }

    /// The sentences in original order.
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document has no sentences.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// All sentences joined by a single space, in original order.
    pub fn join_all(&self) -> String {
        let texts: Vec<&str> = self.sentences.iter().map(|s| s.text.as_str()).collect();
        texts.join(" ")
    }

    /// The given sentences joined by a single space, in the given order.
    ///
    /// Indices outside the document are skipped.
    pub fn join_indices(&self, indices: &[usize]) -> String {
        let texts: Vec<&str> = indices
            .iter()
            .filter_map(|&i| self.sentences.get(i))
            .map(|s| s.text.as_str())
            .collect();
        texts.join(" ")
    }

    /// The first `n` sentences joined by a single space, in original order.
    pub fn join_first(&self, n: usize) -> String {
        let texts: Vec<&str> = self
            .sentences
            .iter()
            .take(n)
            .map(|s| s.text.as_str())
            .collect();
        texts.join(" ")
    }
}

/// The closed set of summarization algorithms.
///
/// Resolved from the request identifier exactly once at the dispatcher
/// boundary; scoring code never re-matches strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Frequency,
    TfIdf,
    TextRank,
    Position,
    NeuralDefault,
    NeuralBart,
    NeuralT5,
}

impl Algorithm {
    /// The neural sub-model this identifier selects, if any.
    pub fn neural_model(self) -> Option<NeuralModel> {
        match self {
            Algorithm::NeuralDefault => Some(NeuralModel::Default),
            Algorithm::NeuralBart => Some(NeuralModel::Bart),
            Algorithm::NeuralT5 => Some(NeuralModel::T5),
            _ => None,
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Frequency-Based" => Ok(Algorithm::Frequency),
            "TF-IDF" => Ok(Algorithm::TfIdf),
            "TextRank" => Ok(Algorithm::TextRank),
            "Position-Based" => Ok(Algorithm::Position),
            other if other.contains("Hugging Face") => {
                if other.contains("BART") {
                    Ok(Algorithm::NeuralBart)
                } else if other.contains("T5") {
                    Ok(Algorithm::NeuralT5)
                } else {
                    Ok(Algorithm::NeuralDefault)
                }
            }
            other => Err(SummarizeError::InvalidAlgorithm(other.to_string())),
        }
    }
}

/// Neural summarizer sub-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeuralModel {
    Default,
    Bart,
    T5,
}

/// Requested summary length for the neural path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// A min/max token-length budget for the neural summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
    pub min: usize,
    pub max: usize,
}

impl SummaryLength {
    /// The token-length budget passed to the neural service.
    pub fn budget(self) -> LengthBudget {
        match self {
            SummaryLength::Short => LengthBudget { min: 30, max: 80 },
            SummaryLength::Medium => LengthBudget { min: 50, max: 150 },
            SummaryLength::Long => LengthBudget { min: 100, max: 250 },
        }
    }
}

impl SummaryLength {
    /// Unrecognized lengths read as Medium; only the algorithm identifier
    /// is validated strictly.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "Short" => SummaryLength::Short,
            "Long" => SummaryLength::Long,
            _ => SummaryLength::Medium,
        }
    }
}

impl std::str::FromStr for SummaryLength {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(value))
    }
}

/// A named entity recognized in the summary text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Sentiment classification of the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// VADER-style compound score in `[-1, 1]`.
    pub score: f64,
}

impl Sentiment {
    /// Classify a compound score: >= 0.05 positive, <= -0.05 negative.
    pub fn from_compound(score: f64) -> Self {
        let label = if score >= 0.05 {
            SentimentLabel::Positive
        } else if score <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self { label, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

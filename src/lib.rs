//! Extractive and neural text summarization.
//!
//! The engine selects a compressed, representative subset of a document's
//! sentences. Four deterministic ranking strategies are built in —
//! frequency, tf-idf, graph centrality (TextRank), and position — all
//! sharing one compression policy and one set of degenerate-input rules.
//! Abstractive summarization, segmentation, and annotation are consumed as
//! injected services ([`services`]), never implemented here.
//!
//! # Example
//!
//! ```no_run
//! use sentrank::{SummarizeRequest, Summarizer};
//! # fn handles() -> Summarizer { unimplemented!() }
//!
//! let summarizer: Summarizer = handles();
//! let response = summarizer.summarize(&SummarizeRequest {
//!     text: "A long article...".to_string(),
//!     algorithm: "TextRank".to_string(),
//!     summary_length: "Medium".to_string(),
//!     compression_ratio: 30,
//!     recognize_entities: false,
//!     analyze_sentiment: false,
//! })?;
//! println!("{}", response.summary);
//! # Ok::<(), sentrank::SummarizeError>(())
//! ```
//!
//! Every summarization is a pure, synchronous computation over its own
//! input; concurrent requests share nothing but the read-only service
//! handles.

pub mod dispatcher;
pub mod error;
pub mod graph;
pub mod pagerank;
pub mod scoring;
pub mod services;
pub mod strategies;
pub mod types;

pub use dispatcher::{SummarizeRequest, SummarizeUrlRequest, Summarizer, SummaryResponse};
pub use error::{BoxError, SummarizeError};
pub use strategies::{summarize as summarize_extractive, ExtractiveStrategy};
pub use types::{
    Algorithm, Document, Entity, LengthBudget, NeuralModel, Sentence, Sentiment, SentimentLabel,
    SummaryLength,
};

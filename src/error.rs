//! Error taxonomy for summarization requests.
//!
//! Only failures the caller can act on surface here. A failing neural
//! service and an edgeless similarity graph are expected outcomes with
//! local fallbacks, so neither has a variant.

use thiserror::Error;

/// Boxed error type used at the external-service seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The algorithm identifier matched no known strategy.
    #[error("invalid algorithm: {0:?}")]
    InvalidAlgorithm(String),

    /// URL fetch/parse yielded no usable plaintext.
    #[error("content extraction failed: {0}")]
    ExtractionFailed(String),

    /// An external operation failed in a way the crate does not recover
    /// from locally. Tagged with the operation so callers see what broke.
    #[error("{operation} failed: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl SummarizeError {
    /// Wrap a service failure with the name of the triggering operation.
    pub fn operation(operation: &'static str, source: BoxError) -> Self {
        Self::Operation { operation, source }
    }
}

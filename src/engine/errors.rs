//! Error types for the station core.

use thiserror::Error;

use crate::llm::LlmError;

/// Errors produced by catalog bootstrap and the suggestion cycle.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid configuration or unsupported values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Configured base URL did not parse.
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    /// Catalog file could not be read.
    #[error("catalog unreadable: {0}")]
    Catalog(#[from] std::io::Error),
    /// Catalog file was not a JSON object of entries.
    #[error("catalog unparseable: {0}")]
    CatalogParse(#[source] serde_json::Error),
    /// Upstream model call failed.
    #[error("model backend error: {0}")]
    Backend(#[from] LlmError),
    /// A suggestion was requested before catalog bootstrap finished.
    #[error("suggestions requested before the catalog was ingested")]
    NotReady,
    /// The suggest reply was not JSON even after fence stripping.
    #[error("model returned malformed JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Convenience result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

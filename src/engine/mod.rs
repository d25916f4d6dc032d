//! The station core: catalog chunking, ingest summarization, and the
//! gated suggestion cycle.
//!
//! Shared state lives in [`state::StationState`]; the summarizer is the sole
//! writer of summaries and the readiness flag, the suggestion engine the
//! sole writer of history.

pub mod chunker;
pub mod errors;
pub mod fence;
pub mod prompts;
pub mod state;
pub mod suggest;
pub mod summarizer;

pub use chunker::chunk;
pub use errors::{EngineError, EngineResult};
pub use state::{StationState, SuggestionItem};
pub use suggest::SuggestionEngine;
pub use summarizer::CatalogSummarizer;

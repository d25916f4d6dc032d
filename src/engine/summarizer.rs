//! One-time catalog bootstrap: chunk the catalog, summarize every chunk,
//! then open the readiness gate.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::config::AppConfig;
use crate::llm::{ChatMessage, ModelBackend};

use super::chunker::chunk;
use super::errors::{EngineError, EngineResult};
use super::prompts::INGEST_SYSTEM_PROMPT;
use super::state::StationState;

/// Folds the catalog document into the station's working summaries.
pub struct CatalogSummarizer {
    backend: Arc<dyn ModelBackend>,
    state: Arc<StationState>,
    model: String,
    chunk_budget: usize,
}

impl CatalogSummarizer {
    /// Create a summarizer bound to the shared station state.
    #[must_use]
    pub fn new(backend: Arc<dyn ModelBackend>, state: Arc<StationState>, config: &AppConfig) -> Self {
        Self {
            backend,
            state,
            model: config.completion_model.clone(),
            chunk_budget: config.chunk_budget,
        }
    }

    /// Ingest the catalog at `path`, then open the readiness gate.
    ///
    /// Chunks are summarized strictly sequentially: the next ingest call is
    /// not issued until the previous summary has been recorded, which keeps
    /// summary order aligned with chunk order and bounds upstream load to
    /// one outstanding request. Any failure here is fatal to the caller;
    /// the station must not serve against a partially ingested catalog.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read or parsed, or if any
    /// ingest call fails.
    pub async fn bootstrap(&self, path: &Path) -> EngineResult<()> {
        let raw = tokio::fs::read_to_string(path).await?;
        let document: Map<String, Value> =
            serde_json::from_str(&raw).map_err(EngineError::CatalogParse)?;

        let chunks = chunk(&document, self.chunk_budget);
        info!(
            "ingesting catalog: {} entries in {} chunks",
            document.len(),
            chunks.len()
        );

        for (index, piece) in chunks.iter().enumerate() {
            info!("summarizing chunk {}/{}", index + 1, chunks.len());
            let messages = [
                ChatMessage::system(INGEST_SYSTEM_PROMPT),
                ChatMessage::user(piece.as_str()),
            ];
            let summary = self.backend.complete(&self.model, &messages).await?;
            self.state.push_summary(summary).await;
        }

        self.state.mark_ready();
        info!(
            "catalog ready: {} summaries collected",
            self.state.summary_count().await
        );
        Ok(())
    }
}

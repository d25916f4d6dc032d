//! The stateful suggest cycle: one completion call per user request,
//! validated structurally and folded into the played-song history.

use std::sync::Arc;

use serde_json::Value;
use tracing::warn;

use crate::config::AppConfig;
use crate::llm::{ChatMessage, ModelBackend};

use super::errors::{EngineError, EngineResult};
use super::fence::strip_code_fence;
use super::prompts::SUGGEST_SYSTEM_PROMPT;
use super::state::{StationState, SuggestionItem};

/// Turns a user utterance into a structured suggestion set.
pub struct SuggestionEngine {
    backend: Arc<dyn ModelBackend>,
    state: Arc<StationState>,
    model: String,
}

impl SuggestionEngine {
    /// Create an engine bound to the shared station state.
    #[must_use]
    pub fn new(backend: Arc<dyn ModelBackend>, state: Arc<StationState>, config: &AppConfig) -> Self {
        Self {
            backend,
            state,
            model: config.completion_model.clone(),
        }
    }

    /// Shared station state handle.
    #[must_use]
    pub fn state(&self) -> &Arc<StationState> {
        &self.state
    }

    /// Answer `utterance` with the model's suggestion object.
    ///
    /// The reply is returned as parsed, even when its `song` field is not
    /// the expected array; in that case the anomaly is logged and the
    /// history is left untouched. History is only appended after the
    /// structural check passes, never on a parse failure.
    ///
    /// # Errors
    /// Returns [`EngineError::NotReady`] before bootstrap has finished,
    /// [`EngineError::MalformedResponse`] when the reply is not JSON, and
    /// [`EngineError::Backend`] when the upstream call fails.
    pub async fn suggest(&self, utterance: &str) -> EngineResult<Value> {
        if !self.state.is_ready() {
            return Err(EngineError::NotReady);
        }

        let summaries = self.state.joined_summaries().await;
        let history = self.state.joined_history().await;
        let messages = [
            ChatMessage::system(SUGGEST_SYSTEM_PROMPT),
            ChatMessage::user(format!("Here is the processed data: {summaries}")),
            ChatMessage::user(format!("You've played these songs before: {history}")),
            ChatMessage::user(format!("Now, respond to this: {utterance}")),
        ];

        let raw = self.backend.complete(&self.model, &messages).await?;
        let stripped = strip_code_fence(&raw);
        let value: Value =
            serde_json::from_str(stripped).map_err(EngineError::MalformedResponse)?;

        match value.get("song") {
            Some(Value::Array(songs)) => {
                match serde_json::from_value::<Vec<SuggestionItem>>(Value::Array(songs.clone())) {
                    Ok(items) => self.state.append_history(items).await,
                    Err(err) => {
                        warn!("song entries did not deserialize, history untouched: {err}");
                    }
                }
            }
            _ => warn!("suggest reply carried a non-array `song` field, history untouched"),
        }

        Ok(value)
    }
}

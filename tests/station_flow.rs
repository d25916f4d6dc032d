//! End-to-end flow: catalog bootstrap through a suggestion cycle, with the
//! model backend stubbed out.

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use airwave_agent::config::AppConfig;
use airwave_agent::engine::{
    CatalogSummarizer, EngineError, StationState, SuggestionEngine, SuggestionItem,
};
use airwave_agent::llm::{ChatMessage, LlmError, ModelBackend};

/// Replays canned completions in order, recording every request.
struct ScriptedBackend {
    replies: Mutex<Vec<String>>,
    requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    fn new(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().rev().map(ToString::to_string).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn complete(&self, _model: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop()
            .ok_or(LlmError::EmptyResponse)
    }

    async fn synthesize_speech(
        &self,
        _model: &str,
        _voice: &str,
        _input: &str,
    ) -> Result<Vec<u8>, LlmError> {
        Ok(Vec::new())
    }
}

const SUGGEST_REPLY: &str = r#"{"song":[{"artist":"X","title":"Y"}],"message":"Here you go!"}"#;

#[tokio::test]
async fn bootstrap_then_suggest_round_trip() {
    let mut catalog = tempfile::NamedTempFile::new().unwrap();
    catalog
        .write_all(br#"{"a": {"artist": "X", "title": "Y"}}"#)
        .unwrap();

    let config = AppConfig {
        chunk_budget: 1000,
        ..AppConfig::default()
    };
    let backend = ScriptedBackend::new(&["a condensed catalog digest", SUGGEST_REPLY]);
    let station = Arc::new(StationState::new());

    // One entry under a 1000-char budget: one chunk, one summary.
    let summarizer = CatalogSummarizer::new(
        Arc::clone(&backend) as Arc<dyn ModelBackend>,
        Arc::clone(&station),
        &config,
    );
    summarizer.bootstrap(catalog.path()).await.unwrap();
    assert_eq!(station.summary_count().await, 1);
    assert!(station.is_ready());

    let engine = SuggestionEngine::new(
        Arc::clone(&backend) as Arc<dyn ModelBackend>,
        Arc::clone(&station),
        &config,
    );

    let value = engine.suggest("play something upbeat").await.unwrap();
    assert_eq!(
        value,
        serde_json::from_str::<Value>(SUGGEST_REPLY).unwrap()
    );
    assert_eq!(
        station.history().await,
        vec![SuggestionItem {
            artist: "X".to_string(),
            title: "Y".to_string(),
        }]
    );

    // The suggest call saw the ingest summary and the utterance.
    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    let suggest_messages = &requests[1];
    assert!(suggest_messages[1].content.contains("a condensed catalog digest"));
    assert!(suggest_messages[3].content.contains("play something upbeat"));
}

#[tokio::test]
async fn suggest_is_gated_until_bootstrap_completes() {
    let backend = ScriptedBackend::new(&[SUGGEST_REPLY]);
    let station = Arc::new(StationState::new());
    let engine = SuggestionEngine::new(backend, station, &AppConfig::default());

    let err = engine.suggest("anything").await;
    assert!(matches!(err, Err(EngineError::NotReady)));
}

//! Process-wide station state shared by the summarizer and suggestion engine.
//!
//! Single-writer discipline: [`super::CatalogSummarizer`] is the only writer
//! of summaries and the readiness flag; [`super::SuggestionEngine`] is the
//! only writer of history. Both lists are append-only for the life of the
//! process.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One suggested song, as returned by the model and recorded in history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Artist name, recited exactly as ingested.
    pub artist: String,
    /// Song title, recited exactly as ingested.
    pub title: String,
}

impl fmt::Display for SuggestionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.artist, self.title)
    }
}

/// Shared mutable state: ingest summaries, played history, readiness gate.
#[derive(Default)]
pub struct StationState {
    summaries: RwLock<Vec<String>>,
    history: RwLock<Vec<SuggestionItem>>,
    ready: AtomicBool,
}

impl StationState {
    /// Create empty state with the gate closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether catalog bootstrap has completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Open the readiness gate. Monotonic: there is no way back.
    pub(crate) fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Append one ingest summary.
    pub(crate) async fn push_summary(&self, summary: String) {
        self.summaries.write().await.push(summary);
    }

    /// Number of ingest summaries collected so far.
    pub async fn summary_count(&self) -> usize {
        self.summaries.read().await.len()
    }

    /// All ingest summaries joined for the suggest prompt.
    pub async fn joined_summaries(&self) -> String {
        self.summaries.read().await.join("\n")
    }

    /// Append suggested songs to the played history, in order.
    pub(crate) async fn append_history(&self, items: Vec<SuggestionItem>) {
        self.history.write().await.extend(items);
    }

    /// Number of songs recorded as played.
    pub async fn history_len(&self) -> usize {
        self.history.read().await.len()
    }

    /// Snapshot of the played history.
    pub async fn history(&self) -> Vec<SuggestionItem> {
        self.history.read().await.clone()
    }

    /// Played history joined for the suggest prompt.
    pub async fn joined_history(&self) -> String {
        self.history
            .read()
            .await
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

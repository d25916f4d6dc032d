//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::engine::{StationState, SuggestionEngine};
use crate::llm::ModelBackend;
use crate::voice::{Announcer, SpeechCache};

/// Shared application state.
pub struct AppState {
    /// Suggestion engine over the bootstrapped station state.
    pub engine: SuggestionEngine,
    /// Voice announcement pipeline.
    pub announcer: Announcer,
    /// Audio artifact store for the voice endpoint.
    pub speech_cache: SpeechCache,
    /// Station configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Assemble the application state around an already bootstrapped
    /// station.
    #[must_use]
    pub fn new(
        config: AppConfig,
        backend: Arc<dyn ModelBackend>,
        station: Arc<StationState>,
    ) -> Arc<Self> {
        let speech_cache = SpeechCache::new(&config.cache_dir);
        let engine = SuggestionEngine::new(Arc::clone(&backend), station, &config);
        let announcer = Announcer::new(backend, speech_cache.clone(), &config);

        Arc::new(Self {
            engine,
            announcer,
            speech_cache,
            config,
        })
    }
}

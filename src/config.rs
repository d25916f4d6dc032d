//! Runtime configuration for the station.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::engine::{EngineError, EngineResult};
use crate::llm::openai::DEFAULT_BASE_URL;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3000;
/// Default chunk budget in characters, sized to the model's token limit.
pub const DEFAULT_CHUNK_BUDGET: usize = 3500;

/// Top-level station configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server port.
    pub server_port: u16,
    /// Path to the catalog JSON document.
    pub catalog_path: PathBuf,
    /// Chunk size budget in characters for catalog ingest.
    pub chunk_budget: usize,
    /// Chat completion model for ingest and suggest calls.
    pub completion_model: String,
    /// Speech synthesis model.
    pub speech_model: String,
    /// Speech synthesis voice.
    pub speech_voice: String,
    /// Directory for synthesized audio artifacts.
    pub cache_dir: PathBuf,
    /// Base URL of the OpenAI-compatible provider.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            catalog_path: PathBuf::from("data/manifest_compact.json"),
            chunk_budget: DEFAULT_CHUNK_BUDGET,
            completion_model: "gpt-4o".to_string(),
            speech_model: "tts-1".to_string(),
            // Of the stock voices, onyx sounds the most like a radio guy.
            speech_voice: "onyx".to_string(),
            cache_dir: PathBuf::from("cache"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from defaults plus `AIRWAVE_*` overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = env_var("AIRWAVE_PORT").and_then(|p| p.parse().ok()) {
            config.server_port = port;
        }
        if let Some(path) = env_var("AIRWAVE_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(budget) = env_var("AIRWAVE_CHUNK_BUDGET").and_then(|b| b.parse().ok()) {
            config.chunk_budget = budget;
        }
        if let Some(model) = env_var("AIRWAVE_MODEL") {
            config.completion_model = model;
        }
        if let Some(model) = env_var("AIRWAVE_SPEECH_MODEL") {
            config.speech_model = model;
        }
        if let Some(voice) = env_var("AIRWAVE_VOICE") {
            config.speech_voice = voice;
        }
        if let Some(dir) = env_var("AIRWAVE_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(url) = env_var("AIRWAVE_BASE_URL") {
            config.base_url = url;
        }

        config
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are out of range or invalid.
    pub fn validate(&self) -> EngineResult<()> {
        if self.chunk_budget == 0 {
            return Err(EngineError::InvalidConfig(
                "chunk_budget must be > 0".to_string(),
            ));
        }

        if self.completion_model.is_empty() {
            return Err(EngineError::InvalidConfig(
                "completion_model must not be empty".to_string(),
            ));
        }

        if self.speech_model.is_empty() || self.speech_voice.is_empty() {
            return Err(EngineError::InvalidConfig(
                "speech_model and speech_voice must not be empty".to_string(),
            ));
        }

        Url::parse(&self.base_url)?;

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_chunk_budget_is_rejected() {
        let config = AppConfig {
            chunk_budget: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let config = AppConfig {
            base_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(EngineError::Url(_))));
    }

    #[test]
    fn empty_voice_is_rejected() {
        let config = AppConfig {
            speech_voice: String::new(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

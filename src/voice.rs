//! Voice announcements: synthesize the host's reply and cache it on disk.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::llm::{LlmError, ModelBackend};

/// Errors raised while generating or storing an announcement.
#[derive(Debug, Error)]
pub enum VoiceError {
    /// Speech synthesis call failed.
    #[error("speech synthesis failed: {0}")]
    Backend(#[from] LlmError),
    /// Audio file could not be written or read.
    #[error("audio io error: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk store of synthesized audio, keyed by query id.
#[derive(Clone, Debug)]
pub struct SpeechCache {
    dir: PathBuf,
}

impl SpeechCache {
    /// Create a cache rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the audio artifact for `id`.
    #[must_use]
    pub fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.mp3"))
    }

    /// Read the cached audio for `id`.
    ///
    /// # Errors
    /// Returns an error if the artifact is absent or unreadable.
    pub async fn read(&self, id: Uuid) -> Result<Vec<u8>, VoiceError> {
        Ok(tokio::fs::read(self.path_for(id)).await?)
    }

    async fn write(&self, id: Uuid, audio: &[u8]) -> Result<(), VoiceError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(id), audio).await?;
        Ok(())
    }
}

/// Synthesizes spoken announcements and stores them in the cache.
pub struct Announcer {
    backend: Arc<dyn ModelBackend>,
    cache: SpeechCache,
    model: String,
    voice: String,
}

impl Announcer {
    /// Create an announcer with the configured speech model and voice.
    #[must_use]
    pub fn new(backend: Arc<dyn ModelBackend>, cache: SpeechCache, config: &AppConfig) -> Self {
        Self {
            backend,
            cache,
            model: config.speech_model.clone(),
            voice: config.speech_voice.clone(),
        }
    }

    /// Synthesize `text` under `id` and report whether audio is available.
    ///
    /// Failures never propagate: a missed announcement downgrades the reply
    /// to text-only rather than failing the query.
    pub async fn speak(&self, text: &str, id: Uuid) -> bool {
        match self.try_speak(text, id).await {
            Ok(()) => true,
            Err(err) => {
                warn!("voice generation failed for {id}: {err}");
                false
            }
        }
    }

    async fn try_speak(&self, text: &str, id: Uuid) -> Result<(), VoiceError> {
        let audio = self
            .backend
            .synthesize_speech(&self.model, &self.voice, text)
            .await?;
        self.cache.write(id, &audio).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use async_trait::async_trait;

    use crate::llm::ChatMessage;

    struct FixedAudioBackend {
        fail: bool,
    }

    #[async_trait]
    impl ModelBackend for FixedAudioBackend {
        async fn complete(
            &self,
            _model: &str,
            _messages: &[ChatMessage],
        ) -> Result<String, LlmError> {
            Ok(String::new())
        }

        async fn synthesize_speech(
            &self,
            _model: &str,
            _voice: &str,
            input: &str,
        ) -> Result<Vec<u8>, LlmError> {
            if self.fail {
                return Err(LlmError::EmptyResponse);
            }
            Ok(input.as_bytes().to_vec())
        }
    }

    fn announcer(dir: &Path, fail: bool) -> Announcer {
        Announcer::new(
            Arc::new(FixedAudioBackend { fail }),
            SpeechCache::new(dir),
            &AppConfig::default(),
        )
    }

    #[test]
    fn artifact_paths_are_keyed_by_id() {
        let cache = SpeechCache::new("cache");
        let id = Uuid::new_v4();
        assert_eq!(cache.path_for(id), PathBuf::from(format!("cache/{id}.mp3")));
    }

    #[tokio::test]
    async fn spoken_audio_lands_in_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let sut = announcer(dir.path(), false);
        let id = Uuid::new_v4();

        assert!(sut.speak("Here you go!", id).await);

        let cache = SpeechCache::new(dir.path());
        assert_eq!(cache.read(id).await.unwrap(), b"Here you go!".to_vec());
    }

    #[tokio::test]
    async fn synthesis_failure_reports_no_audio() {
        let dir = tempfile::tempdir().unwrap();
        let sut = announcer(dir.path(), true);
        let id = Uuid::new_v4();

        assert!(!sut.speak("Here you go!", id).await);

        let cache = SpeechCache::new(dir.path());
        assert!(cache.read(id).await.is_err());
    }
}

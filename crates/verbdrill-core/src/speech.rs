//! Best-effort text-to-speech for the prompt verb.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::QuizError;
use crate::traits::{Speaker, SpeechRequest, SPEECH_LANGUAGE};

/// Wraps a [`Speaker`] so that nothing it does can reach the quiz.
#[derive(Clone)]
pub struct SpeechAdapter {
    speaker: Arc<dyn Speaker>,
    voice: String,
}

impl SpeechAdapter {
    /// An adapter speaking in the fixed German voice.
    pub fn new(speaker: Arc<dyn Speaker>) -> Self {
        Self {
            speaker,
            voice: SPEECH_LANGUAGE.to_string(),
        }
    }

    pub fn with_voice(mut self, voice: &str) -> Self {
        self.voice = voice.to_string();
        self
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    /// Speak `text` on a background task.
    ///
    /// Initialization and playback failures are logged and dropped. A failed
    /// init still attempts playback. Must be called inside a tokio runtime.
    pub fn speak(&self, text: &str) -> JoinHandle<()> {
        let speaker = Arc::clone(&self.speaker);
        let request = SpeechRequest::new(text, &self.voice);
        tokio::spawn(async move {
            if let Err(e) = speaker.init().await {
                let err = QuizError::SpeechFailure(format!("{e:#}"));
                warn!(engine = speaker.name(), error = %err, "an error occurred while initializing speech");
            }
            match speaker.speak(&request).await {
                Ok(()) => debug!(engine = speaker.name(), text = %request.text, "spoke"),
                Err(e) => {
                    let err = QuizError::SpeechFailure(format!("{e:#}"));
                    warn!(engine = speaker.name(), error = %err, "speech playback failed");
                }
            }
        })
    }
}

/// Speaker that does nothing, for `--no-speech` and headless runs.
pub struct NoopSpeaker;

#[async_trait]
impl Speaker for NoopSpeaker {
    fn name(&self) -> &str {
        "none"
    }

    async fn init(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn speak(&self, _: &SpeechRequest) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        fail_init: bool,
        fail_speak: bool,
        spoken: Mutex<Vec<SpeechRequest>>,
    }

    #[async_trait]
    impl Speaker for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        async fn init(&self) -> anyhow::Result<()> {
            if self.fail_init {
                anyhow::bail!("no voices installed");
            }
            Ok(())
        }

        async fn speak(&self, request: &SpeechRequest) -> anyhow::Result<()> {
            self.spoken.lock().unwrap().push(request.clone());
            if self.fail_speak {
                anyhow::bail!("audio device busy");
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn speaks_in_german_voice() {
        let recorder = Arc::new(Recorder::default());
        let adapter = SpeechAdapter::new(recorder.clone());

        adapter.speak("gehen").await.unwrap();

        let spoken = recorder.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].text, "gehen");
        assert_eq!(spoken[0].language, "de-DE");
    }

    #[tokio::test]
    async fn init_failure_still_attempts_playback() {
        let recorder = Arc::new(Recorder {
            fail_init: true,
            ..Default::default()
        });
        let adapter = SpeechAdapter::new(recorder.clone());

        adapter.speak("essen").await.unwrap();
        assert_eq!(recorder.spoken.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn playback_failure_is_swallowed() {
        let recorder = Arc::new(Recorder {
            fail_speak: true,
            ..Default::default()
        });
        let adapter = SpeechAdapter::new(recorder);
        assert!(adapter.speak("laufen").await.is_ok());
    }

    #[tokio::test]
    async fn requests_are_not_deduplicated() {
        let recorder = Arc::new(Recorder::default());
        let adapter = SpeechAdapter::new(recorder.clone());

        let first = adapter.speak("sein");
        let second = adapter.speak("sein");
        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(recorder.spoken.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn custom_voice() {
        let recorder = Arc::new(Recorder::default());
        let adapter = SpeechAdapter::new(recorder.clone()).with_voice("de-AT");
        assert_eq!(adapter.voice(), "de-AT");
        adapter.speak("gehen").await.unwrap();
        assert_eq!(recorder.spoken.lock().unwrap()[0].language, "de-AT");
    }
}

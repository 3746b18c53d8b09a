//! Test doubles for driving a session without a network or speech engine.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use verbdrill_core::events::{EventSink, QuizEvent};
use verbdrill_core::model::Catalog;
use verbdrill_core::traits::{CatalogSource, Speaker, SpeechRequest};

/// Catalog source returning a fixed catalog, or failing when built with
/// [`StaticCatalogSource::unavailable`].
pub struct StaticCatalogSource {
    catalog: Option<Catalog>,
    fetch_count: AtomicU32,
}

impl StaticCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
            fetch_count: AtomicU32::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            catalog: None,
            fetch_count: AtomicU32::new(0),
        }
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn fetch(&self) -> anyhow::Result<Catalog> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.catalog
            .clone()
            .ok_or_else(|| anyhow::anyhow!("static catalog unavailable"))
    }
}

/// Speaker that records every request and can be told to fail.
#[derive(Default)]
pub struct MockSpeaker {
    fail_init: bool,
    fail_speak: bool,
    spoken: Mutex<Vec<SpeechRequest>>,
}

impl MockSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A speaker whose init and playback both fail.
    pub fn broken() -> Self {
        Self {
            fail_init: true,
            fail_speak: true,
            spoken: Mutex::new(Vec::new()),
        }
    }

    pub fn spoken(&self) -> Vec<SpeechRequest> {
        self.spoken.lock().unwrap().clone()
    }
}

#[async_trait]
impl Speaker for MockSpeaker {
    fn name(&self) -> &str {
        "mock"
    }

    async fn init(&self) -> anyhow::Result<()> {
        if self.fail_init {
            anyhow::bail!("mock speech init failure");
        }
        Ok(())
    }

    async fn speak(&self, request: &SpeechRequest) -> anyhow::Result<()> {
        self.spoken.lock().unwrap().push(request.clone());
        if self.fail_speak {
            anyhow::bail!("mock speech playback failure");
        }
        Ok(())
    }
}

/// Event sink that keeps every event in order.
#[derive(Default)]
pub struct RecordingEvents {
    events: Mutex<Vec<QuizEvent>>,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<QuizEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingEvents {
    fn record(&self, event: &QuizEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_source_counts_fetches() {
        let source = StaticCatalogSource::new(Catalog::default());
        source.fetch().await.unwrap();
        source.fetch().await.unwrap();
        assert_eq!(source.fetch_count(), 2);

        let missing = StaticCatalogSource::unavailable();
        assert!(missing.fetch().await.is_err());
    }

    #[tokio::test]
    async fn broken_speaker_still_records() {
        let speaker = MockSpeaker::broken();
        assert!(speaker.init().await.is_err());
        assert!(speaker
            .speak(&SpeechRequest::new("gehen", "de-DE"))
            .await
            .is_err());
        assert_eq!(speaker.spoken().len(), 1);
    }
}

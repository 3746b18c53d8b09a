//! Capability traits for the catalog source, key-value storage, and
//! text-to-speech.
//!
//! Implemented by `verbdrill-adapters`; the quiz engine only sees these
//! seams so it can be driven entirely in-memory under test.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::Catalog;

// ---------------------------------------------------------------------------
// Catalog source
// ---------------------------------------------------------------------------

/// Where the static verb catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location (URL or path) for log lines.
    fn describe(&self) -> String;

    /// Fetch and decode the catalog.
    async fn fetch(&self) -> anyhow::Result<Catalog>;
}

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

/// Durable string-keyed storage surviving across sessions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// In-memory store, used by tests and by `--ephemeral` sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("memory store poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Text-to-speech
// ---------------------------------------------------------------------------

/// Voice language used for every prompt.
pub const SPEECH_LANGUAGE: &str = "de-DE";

/// A single utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    /// Text to speak.
    pub text: String,
    /// BCP 47 voice language (e.g. "de-DE").
    pub language: String,
    /// Volume, 1.0 is the engine default.
    pub volume: f32,
    /// Speaking rate, 1.0 is the engine default.
    pub rate: f32,
    /// Pitch, 1.0 is the engine default.
    pub pitch: f32,
    /// Whether to queue behind an utterance already playing.
    pub queue: bool,
}

impl SpeechRequest {
    /// A request with default volume, rate and pitch, not queued.
    pub fn new(text: &str, language: &str) -> Self {
        Self {
            text: text.to_string(),
            language: language.to_string(),
            volume: 1.0,
            rate: 1.0,
            pitch: 1.0,
            queue: false,
        }
    }
}

/// A text-to-speech engine.
#[async_trait]
pub trait Speaker: Send + Sync {
    /// Engine name for log lines.
    fn name(&self) -> &str;

    /// Prepare the engine. Called before every utterance.
    async fn init(&self) -> anyhow::Result<()>;

    /// Speak one utterance, returning when playback ends.
    async fn speak(&self, request: &SpeechRequest) -> anyhow::Result<()>;
}

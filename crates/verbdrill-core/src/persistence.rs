//! Persistence adapter for the score-annotated catalog and the interface
//! language.
//!
//! Writes are fire-and-forget: a failed write is logged and dropped. Reads
//! never fail: a missing, unreadable, or malformed value is reported as
//! absent so the caller falls back to its default.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::QuizError;
use crate::i18n;
use crate::model::Catalog;
use crate::traits::KeyValueStore;

/// Storage key for the serialized catalog.
pub const CATALOG_KEY: &str = "verben";
/// Storage key for the interface language code.
pub const LANGUAGE_KEY: &str = "lang";

/// Typed access to the two persisted entries.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save_catalog(&self, catalog: &Catalog) {
        match catalog.to_json() {
            Ok(json) => self.write(CATALOG_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize catalog, not saved"),
        }
    }

    /// The stored catalog, or `None` if nothing usable is stored.
    ///
    /// An empty stored catalog is returned as-is; deciding whether it is
    /// worth keeping is the loader's job.
    pub fn load_catalog(&self) -> Option<Catalog> {
        let raw = self.read(CATALOG_KEY)?;
        match Catalog::from_json(&raw) {
            Ok(catalog) => {
                debug!(records = catalog.len(), "restored stored catalog");
                Some(catalog)
            }
            Err(e) => {
                let err = QuizError::StorageCorrupt {
                    key: CATALOG_KEY.to_string(),
                    message: e.to_string(),
                };
                warn!(error = %err, "ignoring stored catalog");
                None
            }
        }
    }

    pub fn save_language(&self, code: &str) {
        self.write(LANGUAGE_KEY, code);
    }

    /// The stored language code, or `None` if absent, blank, or not one of
    /// the offered languages.
    pub fn load_language(&self) -> Option<String> {
        let raw = self.read(LANGUAGE_KEY)?;
        let code = raw.trim();
        let problem = if code.is_empty() {
            "empty language code".to_string()
        } else if !i18n::is_supported(code) {
            format!("unsupported language code {code:?}")
        } else {
            return Some(code.to_string());
        };
        let err = QuizError::StorageCorrupt {
            key: LANGUAGE_KEY.to_string(),
            message: problem,
        };
        warn!(error = %err, "ignoring stored language");
        None
    }

    /// Forget both entries.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.store.remove(CATALOG_KEY)?;
        self.store.remove(LANGUAGE_KEY)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %format!("{e:#}"), "failed to read stored value");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %format!("{e:#}"), "failed to write stored value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::four_verbs;
    use crate::traits::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("disk on fire")
        }
        fn set(&self, _: &str, _: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
        fn remove(&self, _: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    fn memory() -> (Arc<MemoryStore>, Persistence) {
        let store = Arc::new(MemoryStore::new());
        let persistence = Persistence::new(store.clone());
        (store, persistence)
    }

    #[test]
    fn catalog_roundtrip_preserves_scores() {
        let (_, persistence) = memory();
        let mut records: Vec<_> = four_verbs().into_iter().collect();
        records[1].score = 5;
        let catalog = Catalog::new(records);

        persistence.save_catalog(&catalog);
        assert_eq!(persistence.load_catalog(), Some(catalog));
    }

    #[test]
    fn save_of_loaded_catalog_is_idempotent() {
        let (store, persistence) = memory();
        persistence.save_catalog(&four_verbs());
        let first = store.get(CATALOG_KEY).unwrap();

        let loaded = persistence.load_catalog().unwrap();
        persistence.save_catalog(&loaded);
        assert_eq!(store.get(CATALOG_KEY).unwrap(), first);
    }

    #[test]
    fn malformed_catalog_is_absent() {
        let store = Arc::new(MemoryStore::with_entries([(CATALOG_KEY, "not json {")]));
        let persistence = Persistence::new(store);
        assert_eq!(persistence.load_catalog(), None);
    }

    #[test]
    fn wrong_shape_catalog_is_absent() {
        let store = Arc::new(MemoryStore::with_entries([(CATALOG_KEY, r#"{"verb":"gehen"}"#)]));
        let persistence = Persistence::new(store);
        assert_eq!(persistence.load_catalog(), None);
    }

    #[test]
    fn missing_entries_are_absent() {
        let (_, persistence) = memory();
        assert_eq!(persistence.load_catalog(), None);
        assert_eq!(persistence.load_language(), None);
    }

    #[test]
    fn language_roundtrip() {
        let (store, persistence) = memory();
        persistence.save_language("de");
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("de"));
        assert_eq!(persistence.load_language().as_deref(), Some("de"));
    }

    #[test]
    fn blank_language_is_absent() {
        let store = Arc::new(MemoryStore::with_entries([(LANGUAGE_KEY, "  ")]));
        assert_eq!(Persistence::new(store).load_language(), None);
    }

    #[test]
    fn garbage_language_is_absent() {
        for raw in ["<html>\0oops", "xx", "english"] {
            let store = Arc::new(MemoryStore::with_entries([(LANGUAGE_KEY, raw)]));
            assert_eq!(Persistence::new(store).load_language(), None, "{raw:?}");
        }
    }

    #[test]
    fn stored_language_is_trimmed() {
        let store = Arc::new(MemoryStore::with_entries([(LANGUAGE_KEY, "tr\n")]));
        assert_eq!(Persistence::new(store).load_language().as_deref(), Some("tr"));
    }

    #[test]
    fn store_failures_are_swallowed() {
        let persistence = Persistence::new(Arc::new(BrokenStore));
        persistence.save_catalog(&four_verbs());
        persistence.save_language("en");
        assert_eq!(persistence.load_catalog(), None);
        assert_eq!(persistence.load_language(), None);
        assert!(persistence.clear().is_err());
    }

    #[test]
    fn clear_removes_both_keys() {
        let (store, persistence) = memory();
        persistence.save_catalog(&four_verbs());
        persistence.save_language("tr");
        persistence.clear().unwrap();
        assert_eq!(store.get(CATALOG_KEY).unwrap(), None);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
    }
}

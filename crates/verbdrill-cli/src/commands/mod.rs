pub mod init;
pub mod languages;
pub mod play;
pub mod reset;
pub mod show;
pub mod validate;

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use verbdrill_adapters::config::{load_config_from, VerbdrillConfig};
use verbdrill_adapters::store::FileStore;
use verbdrill_core::persistence::Persistence;

use crate::StorageArgs;

/// Load the config and apply command-line overrides.
pub fn resolve_config(storage: &StorageArgs) -> Result<VerbdrillConfig> {
    let mut config = load_config_from(storage.config.as_deref())?;
    if let Some(catalog) = &storage.catalog {
        config.catalog = catalog.clone();
    }
    if let Some(dir) = &storage.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

/// Persistence backed by the configured data directory.
pub fn open_persistence(config: &VerbdrillConfig) -> Result<Persistence> {
    let store = FileStore::open(&config.data_dir)?;
    debug!(dir = %store.dir().display(), "opened data directory");
    Ok(Persistence::new(Arc::new(store)))
}

//! Verb catalog loader.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::QuizError;
use crate::model::Catalog;
use crate::persistence::Persistence;
use crate::traits::CatalogSource;

/// Restores the stored catalog or fetches the static one.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    persistence: Persistence,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>, persistence: Persistence) -> Self {
        Self {
            source,
            persistence,
        }
    }

    /// Load the catalog for a new session.
    ///
    /// A stored, non-empty catalog wins and keeps its scores. Otherwise the
    /// source is fetched once and every score starts at zero. Nothing is
    /// written here; the caller persists what it installs.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load(&self) -> Result<Catalog, QuizError> {
        if let Some(stored) = self.persistence.load_catalog() {
            if !stored.is_empty() {
                info!(records = stored.len(), "using stored catalog");
                return Ok(stored);
            }
        }

        let fetched = self
            .source
            .fetch()
            .await
            .map_err(|e| QuizError::CatalogUnavailable(format!("{e:#}")))?;
        info!(records = fetched.len(), "fetched catalog");
        Ok(fetched.with_zero_scores())
    }
}

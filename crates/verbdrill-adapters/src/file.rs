//! Static catalog read from a local JSON file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use verbdrill_core::model::Catalog;
use verbdrill_core::traits::CatalogSource;

use crate::error::AdapterError;

pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> anyhow::Result<Catalog> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read catalog: {}", self.path.display()))?;

        let catalog = Catalog::from_json(&content).map_err(|e| AdapterError::InvalidCatalog {
            source_name: self.describe(),
            message: e.to_string(),
        })?;
        Ok(catalog)
    }
}

//! Static catalog served over HTTP.

use async_trait::async_trait;
use tracing::instrument;

use verbdrill_core::model::Catalog;
use verbdrill_core::traits::CatalogSource;

use crate::error::AdapterError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches `verben.json` (or any catalog URL) with a single GET.
pub struct HttpCatalogSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AdapterError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> anyhow::Result<Catalog> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                AdapterError::Timeout(DEFAULT_TIMEOUT_SECS)
            } else {
                AdapterError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(AdapterError::HttpStatus {
                status,
                url: self.url.clone(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AdapterError::NetworkError(e.to_string()))?;

        let catalog = Catalog::from_json(&body).map_err(|e| AdapterError::InvalidCatalog {
            source_name: self.url.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(records = catalog.len(), "downloaded catalog");
        Ok(catalog)
    }
}

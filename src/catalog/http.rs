//! HTTP catalog source.
//!
//! Fetches the catalog document (shape `{ "bwvs": ["bwv1006", ...] }`) from
//! the configured URL with a plain GET. No timeout beyond the transport's
//! own defaults and no retries: a failed fetch degrades to the fallback
//! list at the loader boundary.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Url;
use serde::Deserialize;

use crate::catalog::source::{CatalogError, CatalogSource};
use crate::core::work::WorkId;

/// The remote document. The field name is fixed by the catalog contract.
#[derive(Deserialize, Debug)]
struct CatalogDocument {
    bwvs: Vec<WorkId>,
}

pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpCatalogSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_works(&self) -> Result<Vec<WorkId>, CatalogError> {
        debug!("Fetching work catalog from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Catalog fetch failed with HTTP {status}");
            return Err(CatalogError::Api { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let document: CatalogDocument =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if document.bwvs.is_empty() {
            return Err(CatalogError::Empty);
        }

        debug!("Catalog lists {} works", document.bwvs.len());
        Ok(document.bwvs)
    }
}

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use gallery_core::data_processor::CatalogProcessor;
use gallery_core::error::{Error, Result};
use gallery_core::traits::CatalogSource;
use gallery_core::types::CatalogRecord;

/// Reads the catalog document with a single GET. No retries.
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn location(&self) -> &str { &self.url }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<CatalogRecord>> {
        let start = Instant::now();
        debug!("requesting catalog");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("GET {} failed: {}", self.url, e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("GET {} returned {}", self.url, status)));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("reading body of {} failed: {}", self.url, e)))?;
        let processed = CatalogProcessor::new().process_payload(&body)?;
        info!(
            records = processed.records.len(),
            skipped = processed.skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "catalog fetched"
        );
        Ok(processed.records)
    }
}

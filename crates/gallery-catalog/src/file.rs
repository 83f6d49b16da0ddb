use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, instrument};

use gallery_core::data_processor::CatalogProcessor;
use gallery_core::error::{Error, Result};
use gallery_core::traits::CatalogSource;
use gallery_core::types::CatalogRecord;

/// Catalog document stored on local disk, e.g. a mirrored copy for offline use.
pub struct FileCatalogSource {
    path: PathBuf,
    label: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn location(&self) -> &str { &self.label }

    #[instrument(skip(self), fields(path = %self.label))]
    async fn fetch(&self) -> Result<Vec<CatalogRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Fetch(format!("reading {} failed: {}", self.label, e)))?;
        let processed = CatalogProcessor::new().process_payload(&bytes)?;
        info!(records = processed.records.len(), skipped = processed.skipped, "catalog loaded");
        Ok(processed.records)
    }
}

use async_trait::async_trait;
use std::sync::Arc;

use gallery_core::error::Result;
use gallery_core::traits::CatalogSource;
use gallery_core::types::CatalogRecord;

/// A fixed snapshot held in memory. Each `fetch` hands out a fresh copy.
#[derive(Clone)]
pub struct StaticCatalogSource {
    records: Arc<Vec<CatalogRecord>>,
}

impl StaticCatalogSource {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records: Arc::new(records) }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    fn location(&self) -> &str { "memory" }

    async fn fetch(&self) -> Result<Vec<CatalogRecord>> {
        Ok(self.records.as_ref().clone())
    }
}

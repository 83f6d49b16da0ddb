use async_trait::async_trait;

use crate::error::Result;
use crate::types::CatalogRecord;

/// A place the catalog snapshot can be read from.
///
/// Every call performs a fresh read; implementations do not cache. Errors are
/// `Error::Fetch` for transport problems and `Error::Format` for payloads that
/// are not an ordered list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, for logs.
    fn location(&self) -> &str;

    /// Read and decode the full catalog, preserving source order.
    async fn fetch(&self) -> Result<Vec<CatalogRecord>>;
}

#[async_trait]
impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn location(&self) -> &str { (**self).location() }
    async fn fetch(&self) -> Result<Vec<CatalogRecord>> { (**self).fetch().await }
}

//! gallery-catalog
//!
//! Catalog Index Loader implementations. Each source performs one fresh read
//! per `fetch` and hands back the decoded records in source order.

pub mod file;
pub mod http;
pub mod memory;

pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;
pub use memory::StaticCatalogSource;

use std::time::Duration;

use gallery_core::config::{expand_path, CatalogSettings};
use gallery_core::error::{Error, Result};
use gallery_core::traits::CatalogSource;

/// Pick a source from configuration. A local `path` wins over `url`.
pub fn source_from_settings(settings: &CatalogSettings) -> Result<Box<dyn CatalogSource>> {
    if let Some(path) = settings.path.as_deref().filter(|p| !p.is_empty()) {
        return Ok(Box::new(FileCatalogSource::new(expand_path(path))));
    }
    if let Some(url) = settings.url.as_deref().filter(|u| !u.is_empty()) {
        let source = HttpCatalogSource::new(url, Duration::from_secs(settings.timeout_secs))?;
        return Ok(Box::new(source));
    }
    Err(Error::InvalidConfig("either catalog.path or catalog.url must be set".to_string()))
}

//! Mapping from catalog records to the public result shape.

use serde::{Deserialize, Serialize};

use crate::types::{CatalogRecord, NormalizedResult};

pub const DEFAULT_DOWNLOAD_BASE: &str = "/wallpapers/main";
pub const DEFAULT_PREVIEW_BASE: &str = "/wallpapers/cache";

/// Base locations for full-resolution and preview assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetUrls {
    pub download_base: String,
    pub preview_base: String,
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self {
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
            preview_base: DEFAULT_PREVIEW_BASE.to_string(),
        }
    }
}

impl AssetUrls {
    pub fn new(download_base: impl Into<String>, preview_base: impl Into<String>) -> Self {
        Self { download_base: download_base.into(), preview_base: preview_base.into() }
    }

    pub fn download_url(&self, main_file_name: &str) -> String {
        join_url(&self.download_base, main_file_name)
    }

    pub fn preview_url(&self, cache_file_name: &str) -> String {
        join_url(&self.preview_base, cache_file_name)
    }
}

fn join_url(base: &str, name: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), name)
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    assets: AssetUrls,
}

impl Normalizer {
    pub fn new(assets: AssetUrls) -> Self { Self { assets } }

    pub fn normalize(&self, record: &CatalogRecord) -> NormalizedResult {
        let main = record.main_file_name();
        let cache = record.cache_file_name();
        let (width, height) = record.dimensions().unwrap_or((0, 0));
        NormalizedResult {
            id: record.file_name.clone(),
            download_url: self.assets.download_url(&main),
            preview_url: self.assets.preview_url(&cache),
            display_name: main,
            resolution: record.resolution(),
            platform: record.platform(),
            width,
            height,
        }
    }

    pub fn normalize_all<'a, I>(&self, records: I) -> Vec<NormalizedResult>
    where
        I: IntoIterator<Item = &'a CatalogRecord>,
    {
        records.into_iter().map(|r| self.normalize(r)).collect()
    }
}

use tracing::debug;

use gallery_core::normalize::Normalizer;
use gallery_core::types::{CatalogRecord, NormalizedResult, Platform};

use crate::fields::{list_values, scalar_values};

/// Lowercased, trimmed needle; `None` for a blank query.
fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// True when any searchable field of `record` contains `needle`.
///
/// `needle` must already be lowercased. Records without `data` never match.
pub fn matches(record: &CatalogRecord, needle: &str) -> bool {
    let (Some(scalars), Some(lists)) = (scalar_values(record), list_values(record)) else {
        return false;
    };
    scalars.iter().any(|v| v.to_lowercase().contains(needle))
        || lists.iter().flat_map(|l| l.iter()).any(|v| v.to_lowercase().contains(needle))
}

/// Stable filter of `catalog` by a case-insensitive substring query.
pub fn search(catalog: &[CatalogRecord], query: &str, normalizer: &Normalizer) -> Vec<NormalizedResult> {
    let Some(needle) = normalize_query(query) else {
        return Vec::new();
    };
    let hits = normalizer.normalize_all(catalog.iter().filter(|r| matches(r, &needle)));
    debug!(query = %needle, candidates = catalog.len(), hits = hits.len(), "text search");
    hits
}

/// Keep only results for `platform`; `None` keeps everything.
pub fn filter_platform(results: Vec<NormalizedResult>, platform: Option<Platform>) -> Vec<NormalizedResult> {
    match platform {
        Some(p) => results.into_iter().filter(|r| r.platform == p).collect(),
        None => results,
    }
}

/// Search with a fixed normalizer, for callers that issue many queries.
#[derive(Debug, Clone, Default)]
pub struct TextSearchEngine {
    normalizer: Normalizer,
}

impl TextSearchEngine {
    pub fn new(normalizer: Normalizer) -> Self { Self { normalizer } }

    pub fn search(&self, catalog: &[CatalogRecord], query: &str, platform: Option<Platform>) -> Vec<NormalizedResult> {
        filter_platform(search(catalog, query, &self.normalizer), platform)
    }
}

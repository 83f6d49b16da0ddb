//! gallery-service
//!
//! Consumer-facing facade: fetch a fresh catalog snapshot, run one of the
//! engines over it, and hand back normalized results.

pub mod latest;

pub use latest::{RequestGate, RequestTicket};

use tracing::debug;

use gallery_catalog::source_from_settings;
use gallery_core::config::{Config, GallerySettings};
use gallery_core::error::Result;
use gallery_core::normalize::Normalizer;
use gallery_core::traits::CatalogSource;
use gallery_core::types::{NormalizedResult, Platform};
use gallery_similar::{page, page_count, RevealCursor, SimilarityEngine, SimilarityWeights};
use gallery_text::TextSearchEngine;

/// `similarity.weights` from configuration, or the default table when the
/// section is absent.
pub fn similarity_weights(config: &Config) -> Result<SimilarityWeights> {
    Ok(config.get_optional::<SimilarityWeights>("similarity.weights")?.unwrap_or_default())
}

/// Ranked similarity results, paged by a caller-supplied page size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedList {
    items: Vec<NormalizedResult>,
}

impl RankedList {
    pub fn new(items: Vec<NormalizedResult>) -> Self { Self { items } }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn items(&self) -> &[NormalizedResult] { &self.items }

    /// Page `page_index` of `page_size`; past the last page wraps to page 0.
    pub fn get_page(&self, page_index: usize, page_size: usize) -> &[NormalizedResult] {
        page(&self.items, page_index, page_size)
    }

    pub fn page_count(&self, page_size: usize) -> usize { page_count(self.items.len(), page_size) }

    pub fn reveal(self, page_size: usize) -> RevealCursor<NormalizedResult> {
        RevealCursor::new(self.items, page_size)
    }
}

pub struct GalleryService<S> where S: CatalogSource {
    source: S,
    text: TextSearchEngine,
    similar: SimilarityEngine,
    search_gate: RequestGate,
    similar_gate: RequestGate,
}

impl<S> GalleryService<S> where S: CatalogSource {
    pub fn new(source: S, normalizer: Normalizer, weights: SimilarityWeights) -> Self {
        Self {
            source,
            text: TextSearchEngine::new(normalizer.clone()),
            similar: SimilarityEngine::new(weights, normalizer),
            search_gate: RequestGate::new(),
            similar_gate: RequestGate::new(),
        }
    }

    pub fn source(&self) -> &S { &self.source }

    /// Text search over a freshly fetched catalog. A blank query returns no
    /// results without fetching.
    pub async fn search(&self, query: &str, platform: Option<Platform>) -> Result<Vec<NormalizedResult>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let catalog = self.source.fetch().await?;
        Ok(self.text.search(&catalog, query, platform))
    }

    /// Like [`search`](Self::search), but `Ok(None)` when a newer search was
    /// started before this one finished.
    pub async fn search_latest(&self, query: &str, platform: Option<Platform>) -> Result<Option<Vec<NormalizedResult>>> {
        let ticket = self.search_gate.issue();
        let results = self.search(query, platform).await?;
        let accepted = self.search_gate.accept(ticket, results);
        if accepted.is_none() { debug!(query, "discarding superseded search"); }
        Ok(accepted)
    }

    pub async fn rank_similar(&self, reference_id: &str) -> Result<RankedList> {
        let catalog = self.source.fetch().await?;
        Ok(RankedList::new(self.similar.rank(&catalog, reference_id)))
    }

    pub async fn rank_similar_latest(&self, reference_id: &str) -> Result<Option<RankedList>> {
        let ticket = self.similar_gate.issue();
        let ranked = self.rank_similar(reference_id).await?;
        let accepted = self.similar_gate.accept(ticket, ranked);
        if accepted.is_none() { debug!(reference_id, "discarding superseded similarity request"); }
        Ok(accepted)
    }

    /// Similar results with their scores, for diagnostics.
    pub async fn rank_similar_scored(&self, reference_id: &str) -> Result<Vec<(NormalizedResult, f64)>> {
        let catalog = self.source.fetch().await?;
        let normalizer = self.similar.normalizer();
        Ok(self
            .similar
            .rank_scored(&catalog, reference_id)
            .into_iter()
            .map(|c| (normalizer.normalize(c.record), c.score))
            .collect())
    }
}

impl GalleryService<Box<dyn CatalogSource>> {
    /// Build from loaded configuration: catalog source, asset bases and
    /// `similarity.weights` (defaults when absent).
    pub fn from_config(config: &Config) -> Result<Self> {
        let settings = config.settings()?;
        Self::from_settings(&settings, similarity_weights(config)?)
    }

    pub fn from_settings(settings: &GallerySettings, weights: SimilarityWeights) -> Result<Self> {
        let source = source_from_settings(&settings.catalog)?;
        Ok(Self::new(source, Normalizer::new(settings.assets.clone()), weights))
    }
}

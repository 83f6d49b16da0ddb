use tracing::debug;

use gallery_core::normalize::Normalizer;
use gallery_core::types::{CatalogRecord, NormalizedResult};

use crate::score::{score, SimilarityWeights};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a CatalogRecord,
    pub score: f64,
}

/// Locate the reference record: the first record in catalog order whose
/// `file_name` or extension-less display name equals `reference_id`.
pub fn find_reference<'a>(catalog: &'a [CatalogRecord], reference_id: &str) -> Option<&'a CatalogRecord> {
    catalog
        .iter()
        .find(|r| r.file_name == reference_id || r.display_stem() == reference_id)
}

/// Every other record with metadata, scored against the reference and sorted
/// by descending score. Equal scores keep catalog order.
pub fn rank_scored<'a>(
    catalog: &'a [CatalogRecord],
    reference_id: &str,
    weights: &SimilarityWeights,
) -> Vec<ScoredCandidate<'a>> {
    let Some(reference) = find_reference(catalog, reference_id) else {
        debug!(reference_id, "reference not found");
        return Vec::new();
    };
    let Some(reference_meta) = reference.data.as_ref() else {
        debug!(reference_id, "reference has no metadata");
        return Vec::new();
    };
    let mut scored: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .filter(|r| r.file_name != reference.file_name)
        .filter_map(|r| {
            r.data
                .as_ref()
                .map(|meta| ScoredCandidate { record: r, score: score(reference_meta, meta, weights) })
        })
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(reference = %reference.file_name, candidates = scored.len(), "ranked similar");
    scored
}

pub fn rank_similar(
    catalog: &[CatalogRecord],
    reference_id: &str,
    weights: &SimilarityWeights,
    normalizer: &Normalizer,
) -> Vec<NormalizedResult> {
    rank_scored(catalog, reference_id, weights)
        .into_iter()
        .map(|c| normalizer.normalize(c.record))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    weights: SimilarityWeights,
    normalizer: Normalizer,
}

impl SimilarityEngine {
    pub fn new(weights: SimilarityWeights, normalizer: Normalizer) -> Self { Self { weights, normalizer } }

    pub fn rank(&self, catalog: &[CatalogRecord], reference_id: &str) -> Vec<NormalizedResult> {
        rank_similar(catalog, reference_id, &self.weights, &self.normalizer)
    }

    pub fn rank_scored<'a>(&self, catalog: &'a [CatalogRecord], reference_id: &str) -> Vec<ScoredCandidate<'a>> {
        rank_scored(catalog, reference_id, &self.weights)
    }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }
}

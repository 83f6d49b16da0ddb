use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use gallery_core::types::WallpaperMeta;

/// Per-term weights of the similarity score.
///
/// Exact-match terms add their weight once; overlap terms add it per shared
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub art_style: f64,
    pub series: f64,
    pub character_name: f64,
    pub primary_color: f64,
    pub secondary_color: f64,
    pub color_palette: f64,
    pub mood: f64,
    pub technique: f64,
    pub tag: f64,
    pub category: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            art_style: 5.0,
            series: 10.0,
            character_name: 3.0,
            primary_color: 1.5,
            secondary_color: 0.75,
            color_palette: 2.0,
            mood: 2.0,
            technique: 1.0,
            tag: 0.5,
            category: 4.0,
        }
    }
}

fn same(a: &str, b: &str) -> bool {
    !a.is_empty() && a == b
}

/// Candidate elements that also occur in the reference list. Duplicates on
/// the candidate side each count.
fn overlap(reference: &[String], candidate: &[String]) -> usize {
    if reference.is_empty() || candidate.is_empty() {
        return 0;
    }
    let reference: HashSet<&str> = reference.iter().map(String::as_str).collect();
    candidate.iter().filter(|c| reference.contains(c.as_str())).count()
}

/// Similarity of `candidate` to `reference`; higher is more similar.
pub fn score(reference: &WallpaperMeta, candidate: &WallpaperMeta, weights: &SimilarityWeights) -> f64 {
    let mut total = 0.0;
    if same(&reference.art_style, &candidate.art_style) { total += weights.art_style; }
    if same(&reference.series, &candidate.series) { total += weights.series; }
    total += overlap(&reference.character_names, &candidate.character_names) as f64 * weights.character_name;
    total += overlap(&reference.primary_colors, &candidate.primary_colors) as f64 * weights.primary_color;
    total += overlap(&reference.secondary_colors, &candidate.secondary_colors) as f64 * weights.secondary_color;
    if same(&reference.color_palette, &candidate.color_palette) { total += weights.color_palette; }
    if same(&reference.mood, &candidate.mood) { total += weights.mood; }
    if same(&reference.technique, &candidate.technique) { total += weights.technique; }
    total += overlap(&reference.tags, &candidate.tags) as f64 * weights.tag;
    if same(&reference.category, &candidate.category) { total += weights.category; }
    total
}

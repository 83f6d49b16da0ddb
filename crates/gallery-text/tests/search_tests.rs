use gallery_core::data_processor::CatalogProcessor;
use gallery_core::normalize::Normalizer;
use gallery_core::types::{CatalogRecord, Platform};
use gallery_text::{filter_platform, matches, search, TextSearchEngine};

fn catalog() -> Vec<CatalogRecord> {
    let payload = serde_json::json!([
        { "file_name": "night-city", "data": { "mood": "Dark", "tags": ["Neon", "Rain"] } },
        { "file_name": "minimal-lines", "orientation": "Mobile",
          "data": { "art_style": "Flat", "tags": ["Minimal", "Dark"] } },
        { "file_name": "dark-forest" },
        { "file_name": "ocean", "orientation": "Mobile",
          "data": { "primary_colors": ["Teal"], "character_names": ["Marina"] } },
        { "file_name": "DarkSide", "data": {} }
    ]);
    CatalogProcessor::new().process_value(payload).expect("decode").records
}

fn ids(results: &[gallery_core::types::NormalizedResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn empty_and_whitespace_queries_return_nothing() {
    let n = Normalizer::default();
    assert!(search(&catalog(), "", &n).is_empty());
    assert!(search(&catalog(), "   ", &n).is_empty());
}

#[test]
fn matching_is_case_insensitive() {
    let n = Normalizer::default();
    let upper = search(&catalog(), "DARK", &n);
    let lower = search(&catalog(), "dark", &n);
    assert_eq!(upper, lower);
    assert_eq!(ids(&lower), ["night-city", "minimal-lines", "DarkSide"]);
}

#[test]
fn records_without_data_never_match() {
    let catalog = catalog();
    let forest = catalog.iter().find(|r| r.file_name == "dark-forest").expect("forest");
    assert!(!matches(forest, "dark"));
    assert!(!matches(forest, "forest"), "not even on its own file name");
}

#[test]
fn substring_matches_inside_list_elements() {
    let results = search(&catalog(), "inim", &Normalizer::default());
    assert_eq!(ids(&results), ["minimal-lines"]);
    let results = search(&catalog(), "arin", &Normalizer::default());
    assert_eq!(ids(&results), ["ocean"], "character names are searched");
}

#[test]
fn no_match_is_empty_not_error() {
    assert!(search(&catalog(), "zzz-nothing", &Normalizer::default()).is_empty());
}

#[test]
fn repeated_search_is_identical() {
    let n = Normalizer::default();
    let catalog = catalog();
    assert_eq!(search(&catalog, "a", &n), search(&catalog, "a", &n));
}

#[test]
fn platform_post_filter() {
    let engine = TextSearchEngine::default();
    let mobile = engine.search(&catalog(), "dark", Some(Platform::Mobile));
    assert_eq!(ids(&mobile), ["minimal-lines"]);
    let desktop = engine.search(&catalog(), "dark", Some(Platform::Desktop));
    assert_eq!(ids(&desktop), ["night-city", "DarkSide"]);
    let all = filter_platform(search(&catalog(), "dark", &Normalizer::default()), None);
    assert_eq!(all.len(), 3);
}

#[test]
fn duplicate_file_names_are_kept_in_catalog_order() {
    let mut catalog = catalog();
    let mut dup = catalog[0].clone();
    dup.orientation = Some("Mobile".to_string());
    catalog.push(dup);
    let results = search(&catalog, "neon", &Normalizer::default());
    assert_eq!(ids(&results), ["night-city", "night-city"]);
    assert_eq!(results[1].platform, Platform::Mobile);
}

#[test]
fn surrounding_whitespace_is_trimmed_from_query() {
    let n = Normalizer::default();
    let padded = search(&catalog(), "  Dark\t", &n);
    assert_eq!(padded, search(&catalog(), "dark", &n));
    assert_eq!(ids(&search(&catalog(), " neon ", &n)), ["night-city"], "tag `Neon` has no padding");
}

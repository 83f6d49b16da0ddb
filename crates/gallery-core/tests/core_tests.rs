use gallery_core::data_processor::CatalogProcessor;
use gallery_core::error::Error;
use gallery_core::normalize::{AssetUrls, Normalizer};
use gallery_core::types::{CatalogRecord, Platform};

const SAMPLE: &str = r#"[
    {
        "file_name": "sunset",
        "width": 1920,
        "height": 1080,
        "orientation": "Landscape",
        "data": { "art_style": "Anime", "tags": ["Warm", "Sky"] }
    },
    {
        "file_name": "city",
        "file_main_name": "city-4k.jpg",
        "file_cache_name": "city-thumb.avif",
        "resolution": "1080x2400",
        "orientation": "Mobile"
    },
    "not an object",
    { "width": 10, "height": 10 },
    { "file_name": "forest", "data": null }
]"#;

#[test]
fn process_payload_keeps_order_and_skips_malformed_entries() {
    let out = CatalogProcessor::new().process_str(SAMPLE).expect("decode");
    let ids: Vec<&str> = out.records.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(ids, ["sunset", "city", "forest"]);
    assert_eq!(out.skipped, 2, "string entry and entry without file_name are dropped");
}

#[test]
fn absent_metadata_fields_default_to_empty() {
    let out = CatalogProcessor::new().process_str(SAMPLE).expect("decode");
    let meta = out.records[0].data.as_ref().expect("sunset has data");
    assert_eq!(meta.art_style, "Anime");
    assert_eq!(meta.series, "");
    assert!(meta.character_names.is_empty());
    assert_eq!(meta.tags, ["Warm", "Sky"]);
    assert!(out.records[1].data.is_none());
    assert!(out.records[2].data.is_none(), "explicit null data is no data");
}

#[test]
fn camel_case_keys_are_accepted() {
    let payload = r#"[{"fileName": "x", "data": {"artStyle": "Pixel", "primaryColors": ["red"]}}]"#;
    let out = CatalogProcessor::new().process_str(payload).expect("decode");
    let meta = out.records[0].data.as_ref().expect("data");
    assert_eq!(meta.art_style, "Pixel");
    assert_eq!(meta.primary_colors, ["red"]);
}

#[test]
fn non_array_payload_is_format_error() {
    let err = CatalogProcessor::new().process_str(r#"{"items": []}"#).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "got {err:?}");
    let err = CatalogProcessor::new().process_str("<html>").unwrap_err();
    assert!(matches!(err, Error::Format(_)), "got {err:?}");
}

#[test]
fn derivation_defaults_use_png_and_webp() {
    let normalizer = Normalizer::new(AssetUrls::new("https://assets.test/main/", "https://assets.test/cache"));
    let r = normalizer.normalize(&CatalogRecord::new("sunset"));
    assert_eq!(r.id, "sunset");
    assert_eq!(r.display_name, "sunset.png");
    assert_eq!(r.download_url, "https://assets.test/main/sunset.png");
    assert_eq!(r.preview_url, "https://assets.test/cache/sunset.webp");
    assert_eq!(r.resolution, "");
    assert_eq!((r.width, r.height), (0, 0));
    assert_eq!(r.platform, Platform::Desktop);
}

#[test]
fn overrides_and_resolution_are_honoured() {
    let out = CatalogProcessor::new().process_str(SAMPLE).expect("decode");
    let normalizer = Normalizer::default();

    let sunset = normalizer.normalize(&out.records[0]);
    assert_eq!(sunset.resolution, "1920x1080");
    assert_eq!((sunset.width, sunset.height), (1920, 1080));

    let city = normalizer.normalize(&out.records[1]);
    assert_eq!(city.display_name, "city-4k.jpg");
    assert!(city.preview_url.ends_with("/city-thumb.avif"));
    assert_eq!(city.resolution, "1080x2400");
    assert_eq!((city.width, city.height), (1080, 2400), "dimensions parsed from resolution");
    assert_eq!(city.platform, Platform::Mobile);
}

#[test]
fn display_stem_strips_extension() {
    let mut record = CatalogRecord::new("abc");
    assert_eq!(record.display_stem(), "abc");
    record.main_file_name = Some("Night Sky.v2.jpg".to_string());
    assert_eq!(record.display_stem(), "Night Sky.v2");
}

#[test]
fn platform_filter_parsing() {
    assert_eq!("desktop".parse::<Platform>().expect("desktop"), Platform::Desktop);
    assert_eq!(" MOBILE ".parse::<Platform>().expect("mobile"), Platform::Mobile);
    assert!(matches!("tablet".parse::<Platform>(), Err(Error::InvalidPlatform(_))));
    assert_eq!(Platform::from_orientation(Some("mobile")), Platform::Desktop, "orientation match is exact");
}

#[test]
fn normalized_result_serializes_camel_case() {
    let r = Normalizer::default().normalize(&CatalogRecord::new("a"));
    let json = serde_json::to_value(&r).expect("serialize");
    assert_eq!(json["displayName"], "a.png");
    assert_eq!(json["platform"], "Desktop");
    assert!(json.get("previewUrl").is_some());
}

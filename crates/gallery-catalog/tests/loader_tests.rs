use std::time::Duration;

use gallery_catalog::{source_from_settings, FileCatalogSource, HttpCatalogSource, StaticCatalogSource};
use gallery_core::config::CatalogSettings;
use gallery_core::error::Error;
use gallery_core::traits::CatalogSource;
use gallery_core::types::CatalogRecord;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog_json() -> serde_json::Value {
    serde_json::json!([
        { "file_name": "b-second", "data": { "tags": ["one"] } },
        { "file_name": "a-first", "orientation": "Mobile" }
    ])
}

async fn source_for(server: &MockServer) -> HttpCatalogSource {
    HttpCatalogSource::new(format!("{}/v1/catalog.json", server.uri()), Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn http_fetch_preserves_source_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/catalog.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .expect(1)
        .mount(&server)
        .await;

    let records = source_for(&server).await.fetch().await.expect("fetch");
    let ids: Vec<&str> = records.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(ids, ["b-second", "a-first"]);
}

#[tokio::test]
async fn http_non_success_is_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = source_for(&server).await.fetch().await.unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "got {err:?}");
}

#[tokio::test]
async fn http_object_payload_is_format_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "records": [] })))
        .mount(&server)
        .await;

    let err = source_for(&server).await.fetch().await.unwrap_err();
    assert!(matches!(err, Error::Format(_)), "got {err:?}");
}

#[tokio::test]
async fn http_unreachable_host_is_fetch_error() {
    let server = MockServer::start().await;
    let url = format!("{}/catalog.json", server.uri());
    drop(server);
    let source = HttpCatalogSource::new(url, Duration::from_secs(2)).expect("client");
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "got {err:?}");
}

#[tokio::test]
async fn each_fetch_reads_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .expect(2)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    source.fetch().await.expect("first");
    source.fetch().await.expect("second");
}

#[tokio::test]
async fn file_source_reads_and_reports_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("catalog.json");
    std::fs::write(&file, catalog_json().to_string()).unwrap();

    let records = FileCatalogSource::new(&file).fetch().await.expect("fetch");
    assert_eq!(records.len(), 2);

    let err = FileCatalogSource::new(tmp.path().join("missing.json")).fetch().await.unwrap_err();
    assert!(matches!(err, Error::Fetch(_)), "got {err:?}");
}

#[tokio::test]
async fn static_source_returns_snapshot() {
    let source = StaticCatalogSource::new(vec![CatalogRecord::new("x"), CatalogRecord::new("y")]);
    assert_eq!(source.fetch().await.expect("fetch").len(), 2);
    assert_eq!(source.location(), "memory");
}

#[test]
fn settings_prefer_path_over_url() {
    let settings = CatalogSettings {
        url: Some("https://example.test/catalog.json".to_string()),
        path: Some("/tmp/catalog.json".to_string()),
        timeout_secs: 5,
    };
    let source = source_from_settings(&settings).expect("source");
    assert_eq!(source.location(), "/tmp/catalog.json");

    let empty = CatalogSettings { url: None, path: None, timeout_secs: 5 };
    assert!(matches!(source_from_settings(&empty), Err(Error::InvalidConfig(_))));
}

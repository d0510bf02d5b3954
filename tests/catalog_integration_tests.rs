use reqwest::Url;
use werkbar::catalog::{self, CatalogError, CatalogSource, HttpCatalogSource, LOAD_WARNING};
use werkbar::core::work::WorkId;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

/// Creates an HTTP source pointed at the mock server's catalog document.
fn source_for(server: &MockServer) -> HttpCatalogSource {
    let url = Url::parse(&format!("{}/bwvs.json", server.uri())).unwrap();
    HttpCatalogSource::new(url)
}

/// Mounts a catalog document response on the mock server.
async fn mount_catalog(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/bwvs.json"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// HTTP Source Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_works_success() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(r#"{"bwvs": ["bwv7", "bwv1006", "bwv3"]}"#),
    )
    .await;

    let works = source_for(&server).fetch_works().await.unwrap();
    let tokens: Vec<&str> = works.iter().map(WorkId::as_str).collect();
    // Document order; sorting happens in WorkList
    assert_eq!(tokens, vec!["bwv7", "bwv1006", "bwv3"]);
}

#[tokio::test]
async fn test_fetch_works_bad_status() {
    let server = MockServer::start().await;
    mount_catalog(&server, ResponseTemplate::new(404)).await;

    let result = source_for(&server).fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_fetch_works_malformed_document() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_string("{not json"),
    )
    .await;

    let result = source_for(&server).fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_works_missing_field() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"works": ["bwv1"]}"#),
    )
    .await;

    let result = source_for(&server).fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_works_wrong_field_type() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"bwvs": "bwv1006"}"#),
    )
    .await;

    let result = source_for(&server).fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_works_empty_list() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"bwvs": []}"#),
    )
    .await;

    let result = source_for(&server).fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Empty)));
}

#[tokio::test]
async fn test_fetch_works_transport_failure() {
    // Nothing listens on port 1
    let source = HttpCatalogSource::new(Url::parse("http://127.0.0.1:1/bwvs.json").unwrap());
    let result = source.fetch_works().await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}

// ============================================================================
// Load Orchestration Tests
// ============================================================================

#[tokio::test]
async fn test_load_sorts_numerically() {
    let server = MockServer::start().await;
    mount_catalog(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(r#"{"bwvs": ["bwv7", "bwv1006", "bwv3"]}"#),
    )
    .await;

    let source = source_for(&server);
    let outcome = catalog::load(&source, &WorkId::new("bwv1006")).await;

    assert!(outcome.loaded);
    assert!(outcome.warning.is_none());
    let tokens: Vec<&str> = outcome.list.iter().map(WorkId::as_str).collect();
    assert_eq!(tokens, vec!["bwv3", "bwv7", "bwv1006"]);
}

#[tokio::test]
async fn test_load_server_error_falls_back() {
    let server = MockServer::start().await;
    mount_catalog(&server, ResponseTemplate::new(500)).await;

    let source = source_for(&server);
    let outcome = catalog::load(&source, &WorkId::new("bwv1006")).await;

    assert!(!outcome.loaded);
    assert_eq!(outcome.warning.as_deref(), Some(LOAD_WARNING));
    let tokens: Vec<&str> = outcome.list.iter().map(WorkId::as_str).collect();
    assert_eq!(tokens, vec!["bwv1006"]);
}

#[tokio::test]
async fn test_load_transport_failure_falls_back() {
    let source = HttpCatalogSource::new(Url::parse("http://127.0.0.1:1/bwvs.json").unwrap());
    let outcome = catalog::load(&source, &WorkId::new("bwv1006")).await;

    assert!(!outcome.loaded);
    assert!(outcome.warning.is_some());
    assert_eq!(outcome.list.len(), 1);
}

use scout_search::{
    SearchError, SearchProvider, SearchTool, SerpApiBackend,
    SerpApiConfigBuilder,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_provider(server: &MockServer) -> SearchProvider {
    let config = SerpApiConfigBuilder::with_api_key("serp-test")
        .with_base_url(format!("{}/search.json", server.uri()))
        .build()
        .unwrap();
    SearchProvider::with_backend(SerpApiBackend::new(config))
}

#[tokio::test]
async fn test_search_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google"))
        .and(query_param("q", "latest nvidia gpu"))
        .and(query_param("num", "5"))
        .and(query_param("api_key", "serp-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer_box_list": ["GeForce RTX 5090"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let result = provider.search("latest nvidia gpu", 5).await.unwrap();
    assert_eq!(result["answer_box_list"][0], "GeForce RTX 5090");
}

#[tokio::test]
async fn test_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid API key. Your API key should be here."
        })))
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let err = provider.search("q", 5).await.unwrap_err();
    match err {
        SearchError::Status { status, message } => {
            assert_eq!(status, 401);
            assert!(message.starts_with("Invalid API key."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_in_successful_reply() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Google hasn't returned any results for this query."
        })))
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let err = provider.search("q", 5).await.unwrap_err();
    assert!(matches!(err, SearchError::Backend(_)));
}

#[tokio::test]
async fn test_tool_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "who maintains rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "search_metadata": { "status": "Success" },
            "organic_results": [
                { "title": "Rust Foundation", "snippet": "Stewards of Rust." },
                { "title": "Rust Project", "snippet": "Teams and WGs." }
            ]
        })))
        .mount(&server)
        .await;

    let tool = SearchTool::new(make_provider(&server));
    assert_eq!(
        tool.observe("who maintains rust").await,
        "[1] Rust Foundation\nStewards of Rust.\n\n[2] Rust Project\nTeams and WGs."
    );
}

#[tokio::test]
async fn test_tool_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let tool = SearchTool::new(make_provider(&server));
    let observation = tool.observe("q").await;
    assert!(observation.starts_with("Search failed: malformed search response"));
}

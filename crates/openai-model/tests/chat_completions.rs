use scout_model::{
    ChatOptions, ErrorKind, ModelMessage, ModelProvider, ModelProviderError,
    ModelRequest,
};
use scout_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn make_provider(server: &MockServer) -> OpenAIProvider {
    let config = OpenAIConfigBuilder::with_api_key("sk-test")
        .with_base_url(format!("{}/v1", server.uri()))
        .build();
    OpenAIProvider::new(config)
}

fn make_request() -> ModelRequest {
    let mut options = ChatOptions::new();
    options.insert("max_tokens".to_owned(), json!(128));
    ModelRequest {
        model: "deepseek-r1".to_owned(),
        messages: vec![ModelMessage::user("Introduce yourself.")],
        options,
    }
}

#[tokio::test]
async fn test_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "deepseek-r1",
            "messages": [{ "role": "user", "content": "Introduce yourself." }],
            "max_tokens": 128
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-42",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "I am a model." },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let resp = provider.send_request(&make_request()).await.unwrap();
    assert_eq!(resp.id.as_deref(), Some("chatcmpl-42"));
    assert_eq!(resp.first_text(), Some("I am a model."));
}

#[tokio::test]
async fn test_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let err = provider.send_request(&make_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert!(err.message().contains("Incorrect API key provided"));
}

#[tokio::test]
async fn test_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let err = provider.send_request(&make_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{ not json", "application/json"),
        )
        .mount(&server)
        .await;

    let provider = make_provider(&server);
    let err = provider.send_request(&make_request()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

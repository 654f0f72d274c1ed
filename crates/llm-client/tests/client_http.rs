//! HTTP-level tests for the OpenAI-compatible client against a wiremock
//! server.

use llm_client::{prompts, LanguageModel, LlmError, OpenAiCompatibleClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn completion_returns_message_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({ "model": "mistral", "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("{\"clauses\":[]}")))
        .mount(&server)
        .await;

    let client =
        OpenAiCompatibleClient::new(format!("{}/v1", server.uri()), "mistral", None).unwrap();

    let content = client
        .complete(prompts::analysis_request("Some NDA text"))
        .await
        .unwrap();
    assert_eq!(content, "{\"clauses\":[]}");
}

#[tokio::test]
async fn non_success_status_is_a_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model blew up"))
        .mount(&server)
        .await;

    let client =
        OpenAiCompatibleClient::new(format!("{}/v1", server.uri()), "mistral", None).unwrap();

    let err = client
        .complete(prompts::analysis_request("text"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::RequestFailed { status: 500, .. }));
}

#[tokio::test]
async fn unparseable_envelope_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client =
        OpenAiCompatibleClient::new(format!("{}/v1", server.uri()), "mistral", None).unwrap();

    let err = client
        .complete(prompts::analysis_request("text"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::MalformedResponse { .. }));
}

#[tokio::test]
async fn empty_choices_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client =
        OpenAiCompatibleClient::new(format!("{}/v1", server.uri()), "mistral", None).unwrap();

    let err = client
        .complete(prompts::analysis_request("text"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::MalformedResponse { .. }));
}

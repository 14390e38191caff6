//! Integration tests for [`gemini_client::GeminiClient`] against a mockito server.
//!
//! Covers: request shape (path, key query parameter, JSON body), text extraction, and the
//! Transport vs MalformedResponse split. Error messages must never contain the API key.

use gemini_client::{GeminiClient, SummaryError, Summarizer};
use mockito::Matcher;

const API_KEY: &str = "AIzaSyTEST-secret-key-0000";
const GENERATE_PATH: &str = "/v1/models/gemini-pro:generateContent";

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::new(API_KEY.to_string()).with_base_url(server.url())
}

/// **Test: summarize posts the prompt with the key and returns the first part's text.**
#[tokio::test]
async fn summarize_returns_first_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "contents": [{"parts": [{"text": "Summarize the topic in 50 bullet points: Cell Biology"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"**Cells**\n* The cell is the basic unit of life."}],"role":"model"},"finishReason":"STOP"}]}"#,
        )
        .create_async()
        .await;

    let summary = client_for(&server).summarize("Cell Biology", 50).await.unwrap();

    assert_eq!(summary, "**Cells**\n* The cell is the basic unit of life.");
    mock.assert_async().await;
}

/// **Test: a configured model changes the request path.**
#[tokio::test]
async fn summarize_uses_configured_model() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server).with_model("gemini-1.5-flash");
    assert_eq!(client.summarize("x", 3).await.unwrap(), "ok");
    mock.assert_async().await;
}

/// **Test: non-2xx is a Transport error carrying the status, without the key.**
#[tokio::test]
async fn summarize_maps_error_status_to_transport() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).summarize("x", 50).await.unwrap_err();

    assert!(err.is_transport());
    let text = err.to_string();
    assert!(text.contains("400"));
    assert!(!text.contains(API_KEY));
}

/// **Test: a 200 response without candidates is MalformedResponse, not Transport.**
#[tokio::test]
async fn summarize_maps_missing_fields_to_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).summarize("x", 50).await.unwrap_err();

    assert!(matches!(err, SummaryError::MalformedResponse(_)));
}

/// **Test: connection failures are Transport errors and the URL (with key) is stripped.**
#[tokio::test]
async fn summarize_connection_failure_does_not_leak_key() {
    let client = GeminiClient::new(API_KEY.to_string()).with_base_url("http://127.0.0.1:9");

    let err = client.summarize("x", 50).await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains(API_KEY));
}

//! Integration tests for the top-level client endpoints.
//!
//! These tests run the blocking client against a local mock server and
//! verify the outgoing requests, envelope unwrapping and error classification.

use std::time::Duration;

use schlep_engine::{
    ApiKey, BaseUrl, ConfigError, SchlepClient, SchlepConfig, SchlepError, StreamConfig,
    TrainConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "test-key";

fn start_server() -> MockServer {
    tokio_test::block_on(MockServer::start())
}

fn mount(server: &MockServer, mock: Mock) {
    tokio_test::block_on(mock.mount(server));
}

fn client_for(server: &MockServer) -> SchlepClient {
    SchlepClient::with_base_url(TEST_KEY, server.uri()).unwrap()
}

// ============================================================================
// Top-level endpoints
// ============================================================================

#[test]
fn test_upload_sends_authenticated_json_and_decodes_response() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/upload"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"data": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job_id": "u1",
                "status": "processing",
                "message": "ok"
            })))
            .expect(1),
    );

    let client = client_for(&server);
    let response = client.upload("hello").unwrap();

    assert_eq!(response.job_id.as_deref(), Some("u1"));
    assert_eq!(response.status.as_deref(), Some("processing"));
    assert_eq!(response.message.as_deref(), Some("ok"));
}

#[test]
fn test_status_unauthorized_is_api_error() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("GET"))
            .and(path("/status/job_123"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
            ),
    );

    let client = client_for(&server);
    let error = client.status("job_123").unwrap_err();

    assert_eq!(error.status_code(), Some(401));
    match error {
        SchlepError::Api(e) => {
            assert_eq!(e.status_code, 401);
            assert_eq!(e.message, "Invalid API key");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_status_unwraps_data_envelope() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("GET"))
            .and(path("/status/job_123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"job_id": "job_123", "status": "completed", "progress": 1.0},
                "request_id": "req_1"
            }))),
    );

    let client = client_for(&server);
    let status = client.status("job_123").unwrap();

    assert_eq!(status.job_id.as_deref(), Some("job_123"));
    assert_eq!(status.status.as_deref(), Some("completed"));
    assert_eq!(status.progress, Some(1.0));
}

#[test]
fn test_server_error_with_plain_text_body_uses_raw_message() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/deploy"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable")),
    );

    let client = client_for(&server);
    let error = client.deploy("model_789").unwrap_err();

    assert!(matches!(
        error,
        SchlepError::Api(ref e) if e.status_code == 503 && e.message == "Service Unavailable"
    ));
}

#[test]
fn test_train_sends_typed_config() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/train"))
            .and(body_json(json!({
                "model_type": "classification",
                "dataset_id": "dataset_123",
                "parameters": {"epochs": 100}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "job_id": "train_1",
                "model_id": "model_1",
                "status": "queued"
            })))
            .expect(1),
    );

    let client = client_for(&server);
    let config = TrainConfig::new()
        .with_model_type("classification")
        .with_dataset_id("dataset_123")
        .with_parameter("epochs", json!(100));
    let response = client.train(&config).unwrap();

    assert_eq!(response.model_id.as_deref(), Some("model_1"));
    assert!(response.message.is_none());
}

#[test]
fn test_train_json_passes_raw_body_through() {
    let raw = r#"{ "model_type" : "regression", "parameters" : {} }"#;
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/train"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(raw))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"job_id": "train_2"})))
            .expect(1),
    );

    let client = client_for(&server);
    let response = client.train_json(raw).unwrap();

    assert_eq!(response.job_id.as_deref(), Some("train_2"));
}

#[test]
fn test_deploy_sends_model_id() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/deploy"))
            .and(body_json(json!({"model_id": "model_789"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "deployment_id": "dep_1",
                "endpoint_url": "https://models.example.com/dep_1",
                "status": "deploying"
            })))
            .expect(1),
    );

    let client = client_for(&server);
    let response = client.deploy("model_789").unwrap();

    assert_eq!(response.deployment_id.as_deref(), Some("dep_1"));
    assert_eq!(
        response.endpoint_url.as_deref(),
        Some("https://models.example.com/dep_1")
    );
}

#[test]
fn test_empty_success_body_decodes_to_defaults() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(204)),
    );

    let client = client_for(&server);
    let response = client.upload("hello").unwrap();

    assert!(response.job_id.is_none());
    assert!(response.status.is_none());
}

#[test]
fn test_invalid_json_success_body_is_json_error() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("GET"))
            .and(path("/status/j1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>")),
    );

    let client = client_for(&server);
    let error = client.status("j1").unwrap_err();

    assert!(matches!(error, SchlepError::Json(_)));
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_stream_sends_no_request() {
    let server = start_server();
    let client = client_for(&server);

    let config = StreamConfig::new().with_event_type("job.completed");
    client.stream(&config).unwrap();

    let received = tokio_test::block_on(server.received_requests()).unwrap();
    assert!(received.is_empty());
}

// ============================================================================
// Transport failures
// ============================================================================

#[test]
fn test_connection_refused_is_network_error_without_status() {
    // Port 1 is reserved and nothing listens on it
    let client = SchlepClient::with_base_url(TEST_KEY, "http://127.0.0.1:1").unwrap();

    let error = client.status("job_123").unwrap_err();

    assert!(matches!(error, SchlepError::Network(_)));
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_request_timeout_is_network_error() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("GET"))
            .and(path("/status/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "late"}))
                    .set_delay(Duration::from_secs(2)),
            ),
    );

    let config = SchlepConfig::builder()
        .api_key(ApiKey::new(TEST_KEY).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .request_timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = SchlepClient::from_config(config).unwrap();

    match client.status("slow").unwrap_err() {
        SchlepError::Network(e) => assert!(e.is_timeout()),
        other => panic!("Expected Network error, got {other:?}"),
    }
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_blank_api_key_fails_before_any_request() {
    for key in ["", "  ", "\t\n"] {
        let result = SchlepClient::with_base_url(key, "http://127.0.0.1:1");
        match result {
            Err(ConfigError::EmptyApiKey) => {}
            other => panic!("Expected EmptyApiKey for {key:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_empty_api_key_message_names_the_key() {
    let error = SchlepClient::new("").unwrap_err();
    assert!(error.to_string().contains("API key"));
}

#[test]
fn test_default_headers_are_sent_with_custom_prefix() {
    let server = start_server();
    mount(
        &server,
        Mock::given(method("GET"))
            .and(path("/status/j1"))
            .and(header_exists("User-Agent"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1),
    );

    let config = SchlepConfig::builder()
        .api_key(ApiKey::new(TEST_KEY).unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .user_agent_prefix("MyApp/1.0")
        .build()
        .unwrap();
    let client = SchlepClient::from_config(config).unwrap();

    assert_eq!(client.status("j1").unwrap().status.as_deref(), Some("ok"));
}

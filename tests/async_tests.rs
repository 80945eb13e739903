//! Integration tests for non-blocking dispatch.

use std::time::Duration;

use schlep_engine::clients::{HttpClient, ResourceClient};
use schlep_engine::{
    ApiKey, BaseUrl, DataFormat, DataProcessingRequest, InvalidRequestError, SchlepClient,
    SchlepConfig, SchlepError,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> SchlepConfig {
    SchlepConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .worker_threads(2)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_train_pipeline_async_resolves_training_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ml/train"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(json!({
            "pipeline_id": "pipe_1",
            "training_data_path": "s3://bucket/train.csv",
            "parameters": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"job_id": "t1", "pipeline_id": "pipe_1", "status": "queued"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SchlepClient::from_config(test_config(&server)).unwrap();
    let job = client
        .ml()
        .train_pipeline_async("pipe_1", Some("s3://bucket/train.csv"), None)
        .await
        .unwrap();

    assert_eq!(job.job_id.as_deref(), Some("t1"));
    assert_eq!(job.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn test_process_data_async_runs_concurrently() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/data/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"job_id": "p1", "status": "completed"}))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = SchlepClient::from_config(test_config(&server)).unwrap();
    let request = DataProcessingRequest::new()
        .with_source_url("https://example.com/data.csv")
        .with_data_format(DataFormat::Csv);

    let data = client.data();
    let (a, b, c) = tokio::join!(
        data.process_data_async(&request),
        data.process_data_async(&request),
        data.process_data_async(&request),
    );

    for result in [a, b, c] {
        assert_eq!(result.unwrap().job_id.as_deref(), Some("p1"));
    }
}

#[tokio::test]
async fn test_async_error_classification_matches_blocking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/data/process"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Missing source"})),
        )
        .mount(&server)
        .await;

    let client = SchlepClient::from_config(test_config(&server)).unwrap();
    let error = client
        .data()
        .process_data_async(&DataProcessingRequest::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        SchlepError::Api(ref e) if e.status_code == 400 && e.message == "Missing source"
    ));
}

#[tokio::test]
async fn test_unsupported_method_sends_no_request() {
    let server = MockServer::start().await;
    let http = HttpClient::new(&test_config(&server)).unwrap();
    let resource = ResourceClient::new(&http, "/users");

    for name in ["PATCH", "HEAD", "connect"] {
        let error = resource
            .execute_async("/me", name, Some(&json!({"a": 1})))
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            SchlepError::InvalidRequest(InvalidRequestError::InvalidMethod { ref method }) if method == name
        ));
    }

    let received = server.received_requests().await.unwrap();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_method_name_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/storage/files/f1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::new(&test_config(&server)).unwrap();
    let resource = ResourceClient::new(&http, "/storage");

    let value = resource
        .execute_async::<Value>("files/f1", "delete", None)
        .await
        .unwrap();

    assert_eq!(value, json!({"deleted": true}));
}

#[tokio::test]
async fn test_post_without_body_sends_empty_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/data/jobs/j1/cancel"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cancelled": true})))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::new(&test_config(&server)).unwrap();
    let resource = ResourceClient::new(&http, "/data");

    let value = resource
        .execute_async::<Value>("/jobs/j1/cancel", "POST", None)
        .await
        .unwrap();

    assert_eq!(value["cancelled"], true);
}

#[tokio::test]
async fn test_put_without_body_sends_json_null() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ml/pipelines/p1"))
        .and(header("Content-Type", "application/json"))
        .and(body_string("null"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pipeline_id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;

    let http = HttpClient::new(&test_config(&server)).unwrap();
    let resource = ResourceClient::new(&http, "/ml");

    let value = resource
        .execute_async::<Value>("pipelines/p1", "put", None)
        .await
        .unwrap();

    assert_eq!(value["pipeline_id"], "p1");
}

#[tokio::test]
async fn test_close_lets_in_flight_requests_finish() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ml/train"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"job_id": "t1", "status": "queued"}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = SchlepClient::from_config(test_config(&server)).unwrap();
    let pending = client.ml().train_pipeline_async("pipe_1", None, None);
    client.close();

    let job = pending.await.unwrap();
    assert_eq!(job.job_id.as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_dropping_client_lets_in_flight_requests_finish() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ml/models/m1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"model_id": "m1"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let http = HttpClient::new(&test_config(&server)).unwrap();
    let resource = ResourceClient::new(&http, "/ml");
    let pending = resource.execute_async::<Value>("models/m1", "GET", None);
    drop(http);

    assert_eq!(pending.await.unwrap()["model_id"], "m1");
}

#[tokio::test]
async fn test_connection_refused_resolves_to_network_error() {
    let config = SchlepConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new("http://127.0.0.1:1").unwrap())
        .worker_threads(1)
        .build()
        .unwrap();
    let client = SchlepClient::from_config(config).unwrap();

    let error = client
        .ml()
        .train_pipeline_async("pipe_1", None, None)
        .await
        .unwrap_err();

    assert!(matches!(error, SchlepError::Network(_)));
    assert_eq!(error.status_code(), None);
}

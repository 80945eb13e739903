//! Types for the top-level upload, train, deploy, status and stream endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::JsonObject;

/// Body of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UploadRequest {
    /// The data to upload.
    pub data: String,
}

impl UploadRequest {
    /// Creates an upload request for `data`.
    #[must_use]
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UploadResponse {
    /// Identifier of the ingestion job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /train`.
///
/// # Example
///
/// ```rust
/// use schlep_engine::TrainConfig;
/// use serde_json::json;
///
/// let config = TrainConfig::new()
///     .with_model_type("classification")
///     .with_dataset_id("dataset_123")
///     .with_parameter("epochs", json!(100));
///
/// let body = serde_json::to_value(&config).unwrap();
/// assert_eq!(body["parameters"]["epochs"], 100);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrainConfig {
    /// Kind of model to train.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,

    /// Dataset to train on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,

    /// Training hyperparameters. Always sent, possibly empty.
    #[serde(default)]
    pub parameters: JsonObject,
}

impl TrainConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `model_type` set.
    #[must_use]
    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    /// Returns a copy with `dataset_id` set.
    #[must_use]
    pub fn with_dataset_id(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }

    /// Returns a copy with all parameters replaced.
    #[must_use]
    pub fn with_parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns a copy with one parameter added or replaced.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }
}

/// Response of `POST /train`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrainResponse {
    /// Identifier of the training job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Identifier of the model being trained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of `POST /deploy`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeployRequest {
    /// Model to deploy.
    pub model_id: String,
}

impl DeployRequest {
    /// Creates a deploy request for `model_id`.
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }
}

/// Response of `POST /deploy`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DeployResponse {
    /// Identifier of the deployment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,

    /// URL serving predictions once deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Deployment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `GET /status/{job_id}`.
///
/// Timestamps are kept as the strings the API sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatusResponse {
    /// Identifier of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Completion fraction or percentage, as reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,

    /// Job result, in whatever shape the job produces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error description for failed jobs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Event subscription settings for [`SchlepClient::stream`](crate::SchlepClient::stream).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StreamConfig {
    /// Event types to subscribe to.
    #[serde(default)]
    pub event_types: Vec<String>,

    /// Filters applied to the event stream.
    #[serde(default)]
    pub filters: JsonObject,
}

impl StreamConfig {
    /// Creates a configuration with no event types and no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with one event type appended.
    #[must_use]
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_types.push(event_type.into());
        self
    }

    /// Returns a copy with one filter added or replaced.
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.filters.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_request_body() {
        let body = serde_json::to_value(UploadRequest::new("hello")).unwrap();
        assert_eq!(body, json!({"data": "hello"}));
    }

    #[test]
    fn test_train_config_always_sends_parameters() {
        let body = serde_json::to_value(TrainConfig::new().with_model_type("regression")).unwrap();
        assert_eq!(body, json!({"model_type": "regression", "parameters": {}}));
    }

    #[test]
    fn test_train_config_builder_is_non_destructive() {
        let base = TrainConfig::new().with_dataset_id("d1");
        let tuned = base.clone().with_parameter("epochs", json!(10));

        assert!(base.parameters.is_empty());
        assert_eq!(tuned.parameters.get("epochs"), Some(&json!(10)));
        assert_eq!(tuned.dataset_id.as_deref(), Some("d1"));
    }

    #[test]
    fn test_deploy_request_body() {
        let body = serde_json::to_value(DeployRequest::new("model_789")).unwrap();
        assert_eq!(body, json!({"model_id": "model_789"}));
    }

    #[test]
    fn test_status_response_with_arbitrary_result() {
        let status: StatusResponse = serde_json::from_value(json!({
            "job_id": "job_123",
            "status": "completed",
            "progress": 1.0,
            "result": {"rows": [1, 2]}
        }))
        .unwrap();

        assert_eq!(status.status.as_deref(), Some("completed"));
        assert_eq!(status.progress, Some(1.0));
        assert_eq!(status.result, Some(json!({"rows": [1, 2]})));
        assert!(status.error.is_none());
    }

    #[test]
    fn test_stream_config_serialization() {
        let config = StreamConfig::new()
            .with_event_type("job.completed")
            .with_filter("pipeline_id", json!("p1"));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({"event_types": ["job.completed"], "filters": {"pipeline_id": "p1"}})
        );
    }
}

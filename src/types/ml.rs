//! Machine learning pipeline types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{timestamp, JsonObject, MlTaskType};

/// A model training job.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrainingJob {
    /// Identifier of the training job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Pipeline being trained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,

    /// Model produced by the job, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Current job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// When the job was created.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When training started.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub started_at: Option<DateTime<Utc>>,

    /// When training finished.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,

    /// Training metrics reported so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JsonObject>,

    /// Human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A trained model.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ModelInfo {
    /// Identifier of the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Algorithm family (e.g., `random_forest`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,

    /// Task the model solves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<MlTaskType>,

    /// Model version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Lifecycle status (e.g., `ready`, `deployed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the model was created.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// Evaluation metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<JsonObject>,

    /// Additional model metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// A request for predictions from a model.
///
/// # Example
///
/// ```rust
/// use schlep_engine::PredictionRequest;
/// use serde_json::json;
///
/// let request = PredictionRequest::new("model_789", json!({"feature1": 1.5}))
///     .with_return_probabilities(true);
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["model_id"], "model_789");
/// assert_eq!(body["return_probabilities"], true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PredictionRequest {
    /// Model to predict with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    /// Input features, in whatever shape the model expects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_data: Option<Value>,

    /// Whether to include class probabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_probabilities: Option<bool>,

    /// Whether to include feature attributions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain_predictions: Option<bool>,
}

impl PredictionRequest {
    /// Creates a request with both flags set to `false`.
    #[must_use]
    pub fn new(model_id: impl Into<String>, input_data: Value) -> Self {
        Self {
            model_id: Some(model_id.into()),
            input_data: Some(input_data),
            return_probabilities: Some(false),
            explain_predictions: Some(false),
        }
    }

    /// Returns a copy with `return_probabilities` set.
    #[must_use]
    pub const fn with_return_probabilities(mut self, enabled: bool) -> Self {
        self.return_probabilities = Some(enabled);
        self
    }

    /// Returns a copy with `explain_predictions` set.
    #[must_use]
    pub const fn with_explain_predictions(mut self, enabled: bool) -> Self {
        self.explain_predictions = Some(enabled);
        self
    }
}

//! Machine learning pipeline resource client.
//!
//! Covers ML pipelines, training jobs, predictions and models under `/ml`.
//!
//! # Example
//!
//! ```rust,ignore
//! use schlep_engine::SchlepClient;
//! use serde_json::json;
//!
//! let client = SchlepClient::from_env()?;
//! let ml = client.ml();
//!
//! let job = ml.train_pipeline("pipe_1", Some("s3://bucket/train.csv"), None)?;
//! let prediction = ml.predict("model_789", json!({"feature1": 1.5}))?;
//! ```

use std::future::Future;

use serde_json::{json, Value};

use crate::clients::{decode, Envelope, HttpClient, ResourceClient, SchlepError};
use crate::types::{JsonObject, ModelInfo, PredictionRequest, TrainingJob};

use super::page_params;

/// Client for the `/ml` resource.
#[derive(Clone, Copy, Debug)]
pub struct MlClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> MlClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/ml";

    /// Creates an ML client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Creates an ML pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn create_pipeline(&self, config: &JsonObject) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post("/pipelines", config)?)
    }

    /// Returns an ML pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn get_pipeline(&self, pipeline_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get(&format!("/pipelines/{pipeline_id}"))?)
    }

    /// Replaces an ML pipeline's configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn update_pipeline(
        &self,
        pipeline_id: &str,
        config: &JsonObject,
    ) -> Result<JsonObject, SchlepError> {
        decode(&self.base.put(&format!("/pipelines/{pipeline_id}"), config)?)
    }

    /// Deletes an ML pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn delete_pipeline(&self, pipeline_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.delete(&format!("/pipelines/{pipeline_id}"))?)
    }

    /// Lists ML pipelines.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_pipelines(&self, page: u32, page_size: u32) -> Result<Vec<JsonObject>, SchlepError> {
        decode(&self.base.get_with_query("/pipelines", page_params(page, page_size))?)
    }

    /// Starts training a pipeline.
    ///
    /// `training_data_path` is omitted from the body when `None`; missing
    /// parameters are sent as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn train_pipeline(
        &self,
        pipeline_id: &str,
        training_data_path: Option<&str>,
        parameters: Option<JsonObject>,
    ) -> Result<TrainingJob, SchlepError> {
        let body = train_body(pipeline_id, training_data_path, parameters);
        decode(&self.base.post("/train", &body)?)
    }

    /// Starts training a pipeline on the worker pool.
    ///
    /// The request is sent immediately; the returned future yields the job.
    pub fn train_pipeline_async(
        &self,
        pipeline_id: &str,
        training_data_path: Option<&str>,
        parameters: Option<JsonObject>,
    ) -> impl Future<Output = Result<TrainingJob, SchlepError>> + Send + 'static {
        let body = train_body(pipeline_id, training_data_path, parameters);
        let pending = self.base.execute_async("/train", "POST", Some(&body));
        async move { decode(&pending.await?) }
    }

    /// Returns a training job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn training_job(&self, job_id: &str) -> Result<TrainingJob, SchlepError> {
        decode(&self.base.get(&format!("/training/{job_id}"))?)
    }

    /// Cancels a training job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn cancel_training(&self, job_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post(&format!("/training/{job_id}/cancel"), &JsonObject::new())?)
    }

    /// Returns the log lines of a training job, optionally only the last `lines`.
    ///
    /// The lines are read from `data.logs`, falling back to `data` and then to
    /// the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn training_logs(&self, job_id: &str, lines: Option<u32>) -> Result<Vec<String>, SchlepError> {
        let value = self.base.get_with_query(
            &format!("/training/{job_id}/logs"),
            [("lines", lines.map(|n| n.to_string()))],
        )?;
        Envelope::DataField("logs").decode(&value)
    }

    /// Lists training jobs, optionally filtered by status and pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_training_jobs(
        &self,
        page: u32,
        page_size: u32,
        status: Option<&str>,
        pipeline_id: Option<&str>,
    ) -> Result<Vec<TrainingJob>, SchlepError> {
        let mut params = page_params(page, page_size);
        params.push(("status", status.map(str::to_string)));
        params.push(("pipeline_id", pipeline_id.map(str::to_string)));
        decode(&self.base.get_with_query("/training", params)?)
    }

    /// Requests predictions without probabilities or explanations.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn predict(&self, model_id: &str, input_data: Value) -> Result<JsonObject, SchlepError> {
        self.predict_with_options(model_id, input_data, false, false)
    }

    /// Requests predictions.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn predict_with_options(
        &self,
        model_id: &str,
        input_data: Value,
        return_probabilities: bool,
        explain_predictions: bool,
    ) -> Result<JsonObject, SchlepError> {
        let request = PredictionRequest::new(model_id, input_data)
            .with_return_probabilities(return_probabilities)
            .with_explain_predictions(explain_predictions);
        decode(&self.base.post("/predict", &request)?)
    }

    /// Starts a batch prediction over stored data.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn batch_predict(
        &self,
        model_id: &str,
        data_path: &str,
        output_path: Option<&str>,
    ) -> Result<JsonObject, SchlepError> {
        let mut body = JsonObject::new();
        body.insert("model_id".to_string(), json!(model_id));
        body.insert("data_path".to_string(), json!(data_path));
        if let Some(output_path) = output_path {
            body.insert("output_path".to_string(), json!(output_path));
        }
        decode(&self.base.post("/predict/batch", &body)?)
    }

    /// Returns a model.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn get_model(&self, model_id: &str) -> Result<ModelInfo, SchlepError> {
        decode(&self.base.get(&format!("/models/{model_id}"))?)
    }

    /// Lists models.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_models(&self, page: u32, page_size: u32) -> Result<Vec<ModelInfo>, SchlepError> {
        decode(&self.base.get_with_query("/models", page_params(page, page_size))?)
    }

    /// Deletes a model.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn delete_model(&self, model_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.delete(&format!("/models/{model_id}"))?)
    }

    /// Returns a model's evaluation metrics.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn model_metrics(&self, model_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get(&format!("/models/{model_id}/metrics"))?)
    }

    /// Returns the download URL of a model. No request is sent.
    #[must_use]
    pub fn model_download_url(&self, model_id: &str) -> String {
        self.base.build_url(&format!("/models/{model_id}/download"))
    }
}

fn train_body(
    pipeline_id: &str,
    training_data_path: Option<&str>,
    parameters: Option<JsonObject>,
) -> JsonObject {
    let mut body = JsonObject::new();
    body.insert("pipeline_id".to_string(), json!(pipeline_id));
    if let Some(path) = training_data_path {
        body.insert("training_data_path".to_string(), json!(path));
    }
    body.insert(
        "parameters".to_string(),
        Value::Object(parameters.unwrap_or_default()),
    );
    body
}

//! Data processing resource client.
//!
//! Covers file ingestion, processing jobs and data pipelines under `/data`.
//!
//! # Example
//!
//! ```rust,ignore
//! use schlep_engine::{DataFormat, MultipartFile, SchlepClient};
//!
//! let client = SchlepClient::from_env()?;
//! let file = MultipartFile::from_path("data.csv")?;
//! let result = client.data().process_file(file, DataFormat::Csv, DataFormat::Parquet)?;
//! println!("Job: {:?}", result.job_id);
//! ```

use std::future::Future;

use serde_json::json;

use crate::clients::{decode, HttpClient, MultipartFile, ResourceClient, SchlepError};
use crate::types::{
    DataFormat, DataProcessingRequest, DataProcessingResult, FileUpload, JobInfo, JsonObject,
    BATCH_PROCESSING_MODE,
};

use super::page_params;

/// Client for the `/data` resource.
#[derive(Clone, Copy, Debug)]
pub struct DataClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> DataClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/data";

    /// Creates a data client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Uploads a file, then processes it in batch mode.
    ///
    /// The uploaded file's URL becomes the processing `source_path`.
    ///
    /// # Errors
    ///
    /// Returns the first error from either the upload or the processing request.
    pub fn process_file(
        &self,
        file: MultipartFile,
        input_format: DataFormat,
        output_format: DataFormat,
    ) -> Result<DataProcessingResult, SchlepError> {
        let request = self.uploaded_request(file, input_format, output_format)?;
        self.process_data(&request)
    }

    /// Like [`process_file`](Self::process_file), with transformation steps.
    ///
    /// # Errors
    ///
    /// Returns the first error from either the upload or the processing request.
    pub fn process_file_with_transformations(
        &self,
        file: MultipartFile,
        input_format: DataFormat,
        output_format: DataFormat,
        transformations: Vec<JsonObject>,
    ) -> Result<DataProcessingResult, SchlepError> {
        let request = self
            .uploaded_request(file, input_format, output_format)?
            .with_transformations(transformations);
        self.process_data(&request)
    }

    /// Processes the data at a remote URL in batch mode.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn process_url(
        &self,
        url: &str,
        input_format: DataFormat,
        output_format: DataFormat,
    ) -> Result<DataProcessingResult, SchlepError> {
        let request = DataProcessingRequest::new()
            .with_source_url(url)
            .with_data_format(input_format)
            .with_processing_mode(BATCH_PROCESSING_MODE)
            .with_output_format(output_format);
        self.process_data(&request)
    }

    /// Submits a processing request.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn process_data(
        &self,
        request: &DataProcessingRequest,
    ) -> Result<DataProcessingResult, SchlepError> {
        decode(&self.base.post("/process", request)?)
    }

    /// Submits a processing request on the worker pool.
    ///
    /// The request is sent immediately; the returned future yields its result.
    pub fn process_data_async(
        &self,
        request: &DataProcessingRequest,
    ) -> impl Future<Output = Result<DataProcessingResult, SchlepError>> + Send + 'static {
        let pending = self.base.execute_async("/process", "POST", Some(request));
        async move { decode(&pending.await?) }
    }

    /// Uploads a file for later processing.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn upload_file(&self, file: MultipartFile) -> Result<FileUpload, SchlepError> {
        decode(&self.base.post_multipart("/upload", file, Vec::new())?)
    }

    /// Returns the status of a processing job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn job_status(&self, job_id: &str) -> Result<JobInfo, SchlepError> {
        decode(&self.base.get(&format!("/jobs/{job_id}"))?)
    }

    /// Returns the result of a finished processing job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn job_result(&self, job_id: &str) -> Result<DataProcessingResult, SchlepError> {
        decode(&self.base.get(&format!("/jobs/{job_id}/result"))?)
    }

    /// Cancels a processing job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn cancel_job(&self, job_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post(&format!("/jobs/{job_id}/cancel"), &JsonObject::new())?)
    }

    /// Lists processing jobs, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_jobs(
        &self,
        page: u32,
        page_size: u32,
        status: Option<&str>,
    ) -> Result<Vec<JobInfo>, SchlepError> {
        let mut params = page_params(page, page_size);
        params.push(("status", status.map(str::to_string)));
        decode(&self.base.get_with_query("/jobs", params)?)
    }

    /// Creates a data pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn create_pipeline(&self, config: &JsonObject) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post("/pipelines", config)?)
    }

    /// Returns a data pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn get_pipeline(&self, pipeline_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get(&format!("/pipelines/{pipeline_id}"))?)
    }

    /// Replaces a data pipeline's configuration.
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

    /// Deletes a data pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn delete_pipeline(&self, pipeline_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.delete(&format!("/pipelines/{pipeline_id}"))?)
    }

    /// Runs a data pipeline. Missing parameters are sent as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn run_pipeline(
        &self,
        pipeline_id: &str,
        parameters: Option<JsonObject>,
    ) -> Result<DataProcessingResult, SchlepError> {
        let body = json!({ "parameters": parameters.unwrap_or_default() });
        decode(&self.base.post(&format!("/pipelines/{pipeline_id}/run"), &body)?)
    }

    /// Lists data pipelines.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_pipelines(&self, page: u32, page_size: u32) -> Result<Vec<JsonObject>, SchlepError> {
        decode(&self.base.get_with_query("/pipelines", page_params(page, page_size))?)
    }

    fn uploaded_request(
        &self,
        file: MultipartFile,
        input_format: DataFormat,
        output_format: DataFormat,
    ) -> Result<DataProcessingRequest, SchlepError> {
        let upload = self.upload_file(file)?;
        Ok(DataProcessingRequest {
            source_path: upload.url,
            ..DataProcessingRequest::new()
        }
        .with_data_format(input_format)
        .with_processing_mode(BATCH_PROCESSING_MODE)
        .with_output_format(output_format))
    }
}

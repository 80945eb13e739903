//! Data processing types.
//!
//! This module provides the request and result types used by
//! [`DataClient`](crate::resources::DataClient) and
//! [`StorageClient`](crate::resources::StorageClient).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, DataFormat, JsonObject};

/// Processing mode used by the file and URL helpers.
pub const BATCH_PROCESSING_MODE: &str = "batch";

/// A request to process a data source.
///
/// Set either `source_path` (a previously uploaded file) or `source_url`.
///
/// # Example
///
/// ```rust
/// use schlep_engine::{DataFormat, DataProcessingRequest};
///
/// let request = DataProcessingRequest::new()
///     .with_source_url("https://example.com/data.csv")
///     .with_data_format(DataFormat::Csv)
///     .with_processing_mode("batch")
///     .with_output_format(DataFormat::Parquet);
///
/// assert_eq!(request.output_format, Some(DataFormat::Parquet));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataProcessingRequest {
    /// Path of an uploaded file to process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,

    /// Remote URL to fetch and process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Format of the input data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<DataFormat>,

    /// Processing mode (e.g., `batch`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_mode: Option<String>,

    /// Ordered transformation steps applied to the data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformations: Option<Vec<JsonObject>>,

    /// Format of the output data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<DataFormat>,

    /// Free-form processing options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<JsonObject>,
}

impl DataProcessingRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `source_path` set.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Returns a copy with `source_url` set.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Returns a copy with `data_format` set.
    #[must_use]
    pub const fn with_data_format(mut self, format: DataFormat) -> Self {
        self.data_format = Some(format);
        self
    }

    /// Returns a copy with `processing_mode` set.
    #[must_use]
    pub fn with_processing_mode(mut self, mode: impl Into<String>) -> Self {
        self.processing_mode = Some(mode.into());
        self
    }

    /// Returns a copy with `transformations` set.
    #[must_use]
    pub fn with_transformations(mut self, transformations: Vec<JsonObject>) -> Self {
        self.transformations = Some(transformations);
        self
    }

    /// Returns a copy with `output_format` set.
    #[must_use]
    pub const fn with_output_format(mut self, format: DataFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Returns a copy with `options` set.
    #[must_use]
    pub fn with_options(mut self, options: JsonObject) -> Self {
        self.options = Some(options);
        self
    }
}

/// The outcome of a data processing job.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DataProcessingResult {
    /// Identifier of the processing job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Job status (e.g., `queued`, `completed`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Location of the processed output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Number of records processed so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_processed: Option<u64>,

    /// Additional job metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// Status information about a processing job.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct JobInfo {
    /// Identifier of the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    /// Current job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// When the job was created.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job was last updated.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// When the job finished.
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,

    /// Completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,

    /// Human-readable status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Additional job metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonObject>,
}

/// A file stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FileUpload {
    /// Identifier of the stored file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,

    /// Location of the file, usable as a processing `source_path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Original file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// MIME type detected by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_processing_request_omits_unset_fields() {
        let request = DataProcessingRequest::new()
            .with_source_path("s3://bucket/data.csv")
            .with_data_format(DataFormat::Csv)
            .with_processing_mode(BATCH_PROCESSING_MODE)
            .with_output_format(DataFormat::Json);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "source_path": "s3://bucket/data.csv",
                "data_format": "csv",
                "processing_mode": "batch",
                "output_format": "json"
            })
        );
    }

    #[test]
    fn test_processing_request_with_transformations() {
        let step: JsonObject = serde_json::from_value(json!({"type": "drop_nulls"})).unwrap();
        let request = DataProcessingRequest::new().with_transformations(vec![step]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["transformations"][0]["type"], "drop_nulls");
    }

    #[test]
    fn test_job_info_parses_timestamps() {
        let job: JobInfo = serde_json::from_value(json!({
            "job_id": "job_1",
            "status": "running",
            "created_at": "2024-01-15T10:30:00Z",
            "progress": 40
        }))
        .unwrap();

        assert_eq!(job.job_id.as_deref(), Some("job_1"));
        assert_eq!(
            job.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(job.progress, Some(40));
        assert!(job.completed_at.is_none());
    }

    #[test]
    fn test_job_info_accepts_epoch_millis_timestamps() {
        let job: JobInfo = serde_json::from_value(json!({
            "job_id": "job_1",
            "created_at": 1_705_314_600_000_i64,
            "completed_at": null
        }))
        .unwrap();

        assert_eq!(
            job.created_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
        );
        assert!(job.completed_at.is_none());

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["created_at"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn test_file_upload_ignores_unknown_fields() {
        let upload: FileUpload = serde_json::from_value(json!({
            "file_id": "f1",
            "url": "s3://bucket/f1",
            "size": 1024,
            "checksum": "abc"
        }))
        .unwrap();

        assert_eq!(upload.file_id.as_deref(), Some("f1"));
        assert_eq!(upload.size, Some(1024));
        assert!(upload.filename.is_none());
    }
}

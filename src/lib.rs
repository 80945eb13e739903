//! # Schlep-engine Rust SDK
//!
//! A Rust SDK for the Schlep-engine data and machine learning platform API,
//! providing type-safe configuration, bearer authentication and blocking and
//! non-blocking request execution.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`SchlepConfig`] and [`SchlepConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - The top-level [`SchlepClient`] with upload, train, deploy and status endpoints
//! - Nine resource clients: data, ml, analytics, document, quality, storage,
//!   monitoring, users and admin
//! - Transparent unwrapping of the `data` response envelope
//! - Non-blocking dispatch for long-running operations
//!
//! ## Quick Start
//!
//! ```rust
//! use schlep_engine::{ApiKey, SchlepConfig};
//!
//! let config = SchlepConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.schlep-engine.com/v1");
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use schlep_engine::{DataFormat, SchlepClient, TrainConfig};
//! use serde_json::json;
//!
//! // Reads SCHLEP_API_KEY
//! let client = SchlepClient::from_env()?;
//!
//! let upload = client.upload("col1,col2\n1,2")?;
//! println!("Job: {:?}", upload.job_id);
//!
//! let config = TrainConfig::new()
//!     .with_model_type("classification")
//!     .with_dataset_id("dataset_123")
//!     .with_parameter("epochs", json!(100));
//! let trained = client.train(&config)?;
//!
//! let result = client
//!     .data()
//!     .process_url("https://example.com/data.csv", DataFormat::Csv, DataFormat::Parquet)?;
//! ```
//!
//! ## Non-blocking Requests
//!
//! Long-running operations have `*_async` variants. The request is dispatched
//! on the client's worker pool as soon as the method returns:
//!
//! ```rust,ignore
//! let pending = client.ml().train_pipeline_async("pipe_1", None, None);
//! // ... other work ...
//! let job = pending.await?;
//! ```
//!
//! ## Error Handling
//!
//! Construction fails early with [`ConfigError`]. Every request returns
//! [`SchlepError`]; only [`SchlepError::Api`] carries an HTTP status code:
//!
//! ```rust,ignore
//! use schlep_engine::SchlepError;
//!
//! match client.status("job_123") {
//!     Ok(status) => println!("{:?}", status.status),
//!     Err(SchlepError::Api(e)) => println!("API error {}: {}", e.status_code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events and installs no subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **No retries**: Every failure surfaces on the first attempt

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;

// Re-export public types at crate root for convenience
pub use client::SchlepClient;
pub use config::{ApiKey, BaseUrl, SchlepConfig, SchlepConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, Envelope, HttpClient, HttpMethod, InvalidRequestError, MultipartFile,
    ResponseFuture, SchlepError,
};

// Re-export resource clients
pub use resources::{
    AdminClient, AnalyticsClient, DataClient, DocumentClient, MlClient, MonitoringClient,
    QualityClient, StorageClient, UsersClient,
};

// Re-export request and response types
pub use types::{
    DataFormat, DataProcessingRequest, DataProcessingResult, DeployRequest, DeployResponse,
    FileUpload, JobInfo, JsonObject, MlTaskType, ModelInfo, PredictionRequest, StatusResponse,
    StreamConfig, TrainConfig, TrainResponse, TrainingJob, UploadRequest, UploadResponse,
};

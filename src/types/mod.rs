//! Request and response types for the Schlep-engine API.
//!
//! All response types are plain structs whose fields are optional: decoding
//! ignores unknown fields and leaves absent ones as `None`. Request types
//! offer `with_*` methods that return an updated copy.
//!
//! Generic endpoints that return free-form objects use [`JsonObject`].

mod api;
mod data;
mod enums;
mod ml;
mod timestamp;

pub use api::{
    DeployRequest, DeployResponse, StatusResponse, StreamConfig, TrainConfig, TrainResponse,
    UploadRequest, UploadResponse,
};
pub use data::{
    DataProcessingRequest, DataProcessingResult, FileUpload, JobInfo, BATCH_PROCESSING_MODE,
};
pub use enums::{DataFormat, MlTaskType};
pub use ml::{ModelInfo, PredictionRequest, TrainingJob};

/// A free-form JSON object, as returned by endpoints without a typed schema.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

//! The top-level Schlep-engine client.
//!
//! [`SchlepClient`] owns the transport and configuration, exposes the four
//! top-level endpoints directly and hands out resource clients for
//! everything else.

use crate::clients::{decode, HttpClient, ResourceClient, SchlepError};
use crate::config::{ApiKey, BaseUrl, SchlepConfig};
use crate::error::ConfigError;
use crate::resources::{
    AdminClient, AnalyticsClient, DataClient, DocumentClient, MlClient, MonitoringClient,
    QualityClient, StorageClient, UsersClient,
};
use crate::types::{
    DeployRequest, DeployResponse, StatusResponse, StreamConfig, TrainConfig, TrainResponse,
    UploadRequest, UploadResponse,
};

/// Client for the Schlep-engine API.
///
/// One client owns one connection pool and one dispatch worker pool, shared
/// by every resource client it hands out. Resource accessors are cheap and
/// may be called repeatedly.
///
/// # Blocking
///
/// All methods except the `*_async` resource operations block the calling
/// thread and must not be called from inside an async runtime.
///
/// # Example
///
/// ```rust,ignore
/// use schlep_engine::{SchlepClient, TrainConfig};
///
/// let client = SchlepClient::new("your-api-key")?;
///
/// let upload = client.upload("col1,col2\n1,2")?;
/// let trained = client.train(&TrainConfig::new().with_model_type("classification"))?;
/// let status = client.status(trained.job_id.as_deref().unwrap_or_default())?;
///
/// let datasets = client.analytics().datasets()?;
/// client.close();
/// ```
#[derive(Debug)]
pub struct SchlepClient {
    config: SchlepConfig,
    http: HttpClient,
}

// Verify SchlepClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchlepClient>();
};

impl SchlepClient {
    /// Creates a client for the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or only
    /// whitespace, or [`ConfigError::TransportInit`] if the transport cannot
    /// be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::from_config(SchlepConfig::builder().api_key(ApiKey::new(api_key)?).build()?)
    }

    /// Creates a client for a custom API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::InvalidBaseUrl`]
    /// for invalid arguments, or [`ConfigError::TransportInit`] if the
    /// transport cannot be created.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = SchlepConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .base_url(BaseUrl::new(base_url)?)
            .build()?;
        Self::from_config(config)
    }

    /// Creates a client whose API key comes from `SCHLEP_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if the variable is
    /// absent or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_config(SchlepConfig::from_env()?)
    }

    /// Creates a client from a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the transport cannot be created.
    pub fn from_config(config: SchlepConfig) -> Result<Self, ConfigError> {
        let http = HttpClient::new(&config)?;
        tracing::debug!("SchlepClient initialized with base URL: {}", config.base_url());
        Ok(Self { config, http })
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url().as_ref()
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &SchlepConfig {
        &self.config
    }

    /// Uploads raw data for ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn upload(&self, data: &str) -> Result<UploadResponse, SchlepError> {
        tracing::debug!("Uploading data");
        decode(&self.root().post("/upload", &UploadRequest::new(data))?)
    }

    /// Starts training a model.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn train(&self, config: &TrainConfig) -> Result<TrainResponse, SchlepError> {
        tracing::debug!("Training model with config: {:?}", config);
        decode(&self.root().post("/train", config)?)
    }

    /// Starts training a model from a JSON configuration sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn train_json(&self, json_config: &str) -> Result<TrainResponse, SchlepError> {
        tracing::debug!("Training model with JSON config");
        decode(&self.root().post_raw("/train", json_config)?)
    }

    /// Deploys a trained model.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn deploy(&self, model_id: &str) -> Result<DeployResponse, SchlepError> {
        tracing::debug!("Deploying model: {}", model_id);
        decode(&self.root().post("/deploy", &DeployRequest::new(model_id))?)
    }

    /// Returns the status of a job.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn status(&self, job_id: &str) -> Result<StatusResponse, SchlepError> {
        tracing::debug!("Checking status for job: {}", job_id);
        decode(&self.root().get(&format!("/status/{job_id}"))?)
    }

    /// Logs the event stream endpoint and subscription for `config`.
    ///
    /// No connection is opened: the WebSocket protocol is not yet supported.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Json`] if the configuration cannot be serialized.
    pub fn stream(&self, config: &StreamConfig) -> Result<(), SchlepError> {
        tracing::debug!("Starting stream with config: {:?}", config);
        let ws_url = format!("{}/stream", self.config.base_url().websocket_url());
        let subscription = serde_json::to_string(config)?;

        tracing::info!("WebSocket connection would be established at: {}", ws_url);
        tracing::info!("Stream configuration: {}", subscription);
        Ok(())
    }

    /// Returns the data processing client.
    #[must_use]
    pub const fn data(&self) -> DataClient<'_> {
        DataClient::new(&self.http)
    }

    /// Returns the ML pipeline client.
    #[must_use]
    pub const fn ml(&self) -> MlClient<'_> {
        MlClient::new(&self.http)
    }

    /// Returns the analytics client.
    #[must_use]
    pub const fn analytics(&self) -> AnalyticsClient<'_> {
        AnalyticsClient::new(&self.http)
    }

    /// Returns the document extraction client.
    #[must_use]
    pub const fn document(&self) -> DocumentClient<'_> {
        DocumentClient::new(&self.http)
    }

    /// Returns the data quality client.
    #[must_use]
    pub const fn quality(&self) -> QualityClient<'_> {
        QualityClient::new(&self.http)
    }

    /// Returns the file storage client.
    #[must_use]
    pub const fn storage(&self) -> StorageClient<'_> {
        StorageClient::new(&self.http)
    }

    /// Returns the monitoring client.
    #[must_use]
    pub const fn monitoring(&self) -> MonitoringClient<'_> {
        MonitoringClient::new(&self.http)
    }

    /// Returns the users client.
    #[must_use]
    pub const fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http)
    }

    /// Returns the admin client.
    #[must_use]
    pub const fn admin(&self) -> AdminClient<'_> {
        AdminClient::new(&self.http)
    }

    /// Shuts down the worker pool and releases pooled connections.
    ///
    /// Returns without waiting. Requests dispatched asynchronously and still
    /// in flight complete or fail on their own, and their futures resolve as
    /// usual. Dropping the client has the same effect.
    pub fn close(mut self) {
        self.http.shutdown();
        tracing::debug!("SchlepClient closed");
    }

    const fn root(&self) -> ResourceClient<'_> {
        ResourceClient::new(&self.http, "")
    }
}

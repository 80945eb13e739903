//! Configuration types for the Schlep-engine SDK.
//!
//! This module provides the configuration used to construct a
//! [`SchlepClient`](crate::SchlepClient).
//!
//! # Overview
//!
//! - [`SchlepConfig`]: The immutable configuration for one client instance
//! - [`SchlepConfigBuilder`]: A builder for constructing [`SchlepConfig`] instances
//! - [`ApiKey`]: A validated, debug-masked API key
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use schlep_engine::{ApiKey, BaseUrl, SchlepConfig};
//!
//! let config = SchlepConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://staging.schlep-engine.com/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://staging.schlep-engine.com/v1");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable supplying the default API key.
pub const API_KEY_ENV_VAR: &str = "SCHLEP_API_KEY";

/// Default timeout for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for a whole request, covering the read and write phases.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a Schlep-engine client.
///
/// `SchlepConfig` is immutable once built. Timeouts are fixed at construction
/// and cannot be overridden per call.
///
/// # Thread Safety
///
/// `SchlepConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct SchlepConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    connect_timeout: Duration,
    request_timeout: Duration,
    worker_threads: Option<usize>,
    user_agent_prefix: Option<String>,
}

impl SchlepConfig {
    /// Creates a new builder for constructing a `SchlepConfig`.
    #[must_use]
    pub fn builder() -> SchlepConfigBuilder {
        SchlepConfigBuilder::new()
    }

    /// Builds a configuration whose API key comes from `SCHLEP_API_KEY`.
    ///
    /// All other fields use their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if the variable is
    /// not set, or is empty after trimming whitespace.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = api_key_from_env_value(std::env::var(API_KEY_ENV_VAR).ok())?;
        Self::builder().api_key(api_key).build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Returns the whole-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns the configured number of dispatch worker threads, if any.
    #[must_use]
    pub const fn worker_threads(&self) -> Option<usize> {
        self.worker_threads
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify SchlepConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SchlepConfig>();
};

/// Resolves an API key from the raw value of the environment variable.
fn api_key_from_env_value(value: Option<String>) -> Result<ApiKey, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingEnvironmentVariable {
            name: API_KEY_ENV_VAR,
        })
        .and_then(ApiKey::new)
}

/// Builder for constructing [`SchlepConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.schlep-engine.com/v1`
/// - `connect_timeout`: 30 seconds
/// - `request_timeout`: 60 seconds
/// - `worker_threads`: the tokio default (one per core)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct SchlepConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
    worker_threads: Option<usize>,
    user_agent_prefix: Option<String>,
}

impl SchlepConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the connect timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the number of threads in the asynchronous dispatch pool.
    #[must_use]
    pub const fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`SchlepConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<SchlepConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(SchlepConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            worker_threads: self.worker_threads.filter(|n| *n > 0),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let result = SchlepConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = SchlepConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), BaseUrl::DEFAULT);
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert!(config.worker_threads().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = SchlepConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .connect_timeout(Duration::from_secs(5))
            .request_timeout(Duration::from_secs(10))
            .worker_threads(2)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://localhost:9000");
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.worker_threads(), Some(2));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_zero_worker_threads_falls_back_to_default() {
        let config = SchlepConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .worker_threads(0)
            .build()
            .unwrap();
        assert!(config.worker_threads().is_none());
    }

    #[test]
    fn test_env_value_present() {
        let key = api_key_from_env_value(Some("env-api-key".to_string())).unwrap();
        assert_eq!(key.as_ref(), "env-api-key");
    }

    #[test]
    fn test_env_value_absent_or_blank() {
        for value in [None, Some(String::new()), Some("   ".to_string())] {
            assert!(matches!(
                api_key_from_env_value(value),
                Err(ConfigError::MissingEnvironmentVariable {
                    name: "SCHLEP_API_KEY"
                })
            ));
        }
    }

    #[test]
    fn test_config_debug_does_not_leak_key() {
        let config = SchlepConfig::builder()
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("SchlepConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchlepConfig>();
    }
}

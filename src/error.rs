//! Error types for the Schlep-engine SDK.
//!
//! This module contains the error type raised while configuring a client.
//! Configuration errors are local and pre-flight: they are produced before
//! any network activity and are never retried.
//!
//! # Example
//!
//! ```rust
//! use schlep_engine::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant carries a human-readable message and no status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key is missing, empty, or only whitespace.
    #[error("API key cannot be null or empty. Please provide a valid Schlep-engine API key.")]
    EmptyApiKey,

    /// The environment variable holding the API key is absent or blank.
    #[error("{name} environment variable not set or empty")]
    MissingEnvironmentVariable {
        /// Name of the environment variable that was read.
        name: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme and host (e.g., 'https://api.schlep-engine.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A string does not name a known enum value.
    #[error("Unknown {kind} value: '{value}'")]
    UnknownEnumValue {
        /// The enum being parsed (e.g., `DataFormat`).
        kind: &'static str,
        /// The value that was provided.
        value: String,
    },

    /// The HTTP transport or its dispatch workers could not be created.
    #[error("Failed to initialize HTTP transport: {reason}")]
    TransportInit {
        /// Description of the underlying failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let message = ConfigError::EmptyApiKey.to_string();
        assert!(message.contains("API key cannot be null or empty"));
        assert!(message.contains("valid Schlep-engine API key"));
    }

    #[test]
    fn test_missing_environment_variable_names_variable() {
        let error = ConfigError::MissingEnvironmentVariable {
            name: "SCHLEP_API_KEY",
        };
        assert_eq!(
            error.to_string(),
            "SCHLEP_API_KEY environment variable not set or empty"
        );
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme and host"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_unknown_enum_value_error_message() {
        let error = ConfigError::UnknownEnumValue {
            kind: "DataFormat",
            value: "yaml".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown DataFormat value: 'yaml'");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }
}

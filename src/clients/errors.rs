//! Request error types for the Schlep-engine SDK.
//!
//! # Error Handling
//!
//! - [`ApiError`]: Non-2xx HTTP responses from the API
//! - [`InvalidRequestError`]: A request rejected locally before it is sent
//! - [`SchlepError`]: Unified error type returned by every request operation
//!
//! Transport failures (DNS, refused connections, timeouts) are surfaced as
//! [`SchlepError::Network`] without further classification. Only
//! [`SchlepError::Api`] carries an HTTP status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use schlep_engine::SchlepError;
//!
//! match client.status("job_123") {
//!     Ok(status) => println!("Status: {:?}", status.status),
//!     Err(SchlepError::Api(e)) if e.status_code == 401 => println!("Check your API key"),
//!     Err(SchlepError::Api(e)) if e.status_code == 429 => println!("Slow down"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-2xx status code.
///
/// The message is the `message` field of a JSON error body when present,
/// otherwise the raw response body text.
///
/// # Example
///
/// ```rust
/// use schlep_engine::ApiError;
///
/// let error = ApiError::from_response(401, r#"{"message":"Invalid API key"}"#);
/// assert_eq!(error.status_code, 401);
/// assert_eq!(error.message, "Invalid API key");
/// assert_eq!(error.to_string(), "API error 401: Invalid API key");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API error {status_code}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status_code: u16,
    /// Best-effort error message.
    pub message: String,
}

impl ApiError {
    /// Builds an error from a failed response's status code and body text.
    ///
    /// Never fails: a body that is not JSON, or has no `message` field,
    /// becomes the message verbatim.
    #[must_use]
    pub fn from_response(status_code: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| match json.get("message")? {
                serde_json::Value::String(message) => Some(message.clone()),
                other => Some(other.to_string()),
            })
            .unwrap_or_else(|| body.to_string());

        Self {
            status_code,
            message,
        }
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The HTTP method name is not supported by the asynchronous executor.
    #[error("Unsupported HTTP method: {method}")]
    InvalidMethod {
        /// The method name that was provided.
        method: String,
    },

    /// The composed URL could not be parsed.
    #[error("Invalid request URL '{url}'")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
    },

    /// The transport was shut down before the request was made.
    #[error("Client is closed")]
    ClientClosed,
}

/// Unified error type for all request operations.
///
/// # Example
///
/// ```rust,ignore
/// use schlep_engine::SchlepError;
///
/// match client.ml().get_model("model_789") {
///     Ok(model) => { /* handle success */ }
///     Err(SchlepError::Api(e)) => { /* remote error, e.status_code */ }
///     Err(SchlepError::Network(e)) => { /* connection or timeout */ }
///     Err(other) => { /* local failure */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum SchlepError {
    /// The API returned a non-2xx status code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed before dispatch.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// Network or connection error from the transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local I/O error, such as reading a file to upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A body could not be encoded, or a response could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An asynchronous request task panicked or was cancelled before completing.
    #[error("Request task did not complete: {0}")]
    Dispatch(#[from] tokio::task::JoinError),
}

impl SchlepError {
    /// Returns the HTTP status code for API errors, `None` for every other kind.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }
}

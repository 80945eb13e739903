//! HTTP client layer for Schlep-engine API communication.
//!
//! This module provides the request-execution and response-normalization
//! core shared by every resource client. It handles authentication header
//! injection, URL composition, JSON and multipart body encoding, blocking and
//! non-blocking dispatch, envelope unwrapping and error classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The transport holding the connection pool and worker pool
//! - [`ResourceClient`]: A transport view bound to one resource path prefix
//! - [`HttpRequest`]: A request relative to a resource prefix
//! - [`RequestDescriptor`]: A fully assembled outgoing request
//! - [`RequestBody`]: JSON or multipart body encodings
//! - [`ResponseFuture`]: Handle to a request dispatched on the worker pool
//! - [`Envelope`]: Locates the payload inside a `data` wrapper
//! - [`SchlepError`]: Unified error type for request operations
//!
//! # Example
//!
//! ```rust,ignore
//! use schlep_engine::clients::{HttpClient, HttpMethod, HttpRequest, RequestBody};
//!
//! let http = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Post, "/upload")
//!     .body(RequestBody::json(&serde_json::json!({"data": "hello"}))?)
//!     .build();
//!
//! let descriptor = http.prepare("", request)?;
//! let value = http.execute(descriptor)?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every failure is returned to the caller on the first attempt.

mod envelope;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod resource;

pub use envelope::{decode, Envelope, DATA_KEY};
pub use errors::{ApiError, InvalidRequestError, SchlepError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    FileContents, HttpMethod, HttpRequest, HttpRequestBuilder, MultipartFile, MultipartUpload,
    RequestBody, RequestDescriptor, JSON_CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE,
};
pub use http_response::{is_success, parse_response, ResponseFuture};
pub use resource::ResourceClient;

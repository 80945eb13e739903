//! HTTP request types for the Schlep-engine SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, the body
//! encodings the API accepts, and the fully assembled [`RequestDescriptor`].

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::clients::errors::{InvalidRequestError, SchlepError};

/// Content type sent with JSON bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of the file part in multipart uploads.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP methods used by the Schlep-engine API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering jobs.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Patch => write!(f, "PATCH"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidRequestError;

    /// Parses a method name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            _ => Err(InvalidRequestError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// Where the contents of a [`MultipartFile`] come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContents {
    /// An in-memory buffer.
    Bytes(Vec<u8>),
    /// A file on disk, opened and streamed when the request is sent.
    Path(PathBuf),
}

/// A file to send as the `file` part of a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartFile {
    /// File name reported in the part's `Content-Disposition`.
    pub file_name: String,
    /// The file contents.
    pub contents: FileContents,
}

impl MultipartFile {
    /// Creates a multipart file from an in-memory buffer.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            contents: FileContents::Bytes(bytes.into()),
        }
    }

    /// Refers to a file on disk, using its final path component as the file name.
    ///
    /// The file is not read here; its contents are streamed when the request
    /// is sent.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if the path does not exist or is not a
    /// regular file.
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if !std::fs::metadata(path)?.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            file_name,
            contents: FileContents::Path(path.to_path_buf()),
        })
    }
}

/// A multipart form: exactly one file part plus ordered string fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartUpload {
    /// The file sent under the part name `file`.
    pub file: MultipartFile,
    /// Additional form fields, in the order they are appended.
    pub fields: Vec<(String, String)>,
}

impl MultipartUpload {
    /// Converts the upload into a reqwest form.
    ///
    /// Path-backed files are opened here and streamed with a known length.
    /// The transport generates the boundary and the multipart `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Io`] if a path-backed file cannot be opened and
    /// [`SchlepError::Network`] if the part MIME type is rejected.
    pub async fn into_form(self) -> Result<Form, SchlepError> {
        let part = match self.file.contents {
            FileContents::Bytes(bytes) => Part::bytes(bytes),
            FileContents::Path(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let length = file.metadata().await?.len();
                Part::stream_with_length(reqwest::Body::from(file), length)
            }
        };
        let part = part
            .file_name(self.file.file_name)
            .mime_str(OCTET_STREAM_CONTENT_TYPE)?;

        let form = Form::new().part("file", part);
        Ok(self
            .fields
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value)))
    }
}

/// An encoded request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// JSON bytes, sent with `Content-Type: application/json`.
    Json(Vec<u8>),
    /// A multipart form, sent with a transport-generated boundary.
    Multipart(MultipartUpload),
}

impl RequestBody {
    /// Serializes a value to a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the value cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_vec(value).map(Self::Json)
    }

    /// Wraps JSON text the caller already has, without re-encoding it.
    #[must_use]
    pub fn raw_json(text: impl Into<String>) -> Self {
        Self::Json(text.into().into_bytes())
    }

    /// An empty payload that is still typed as JSON.
    #[must_use]
    pub const fn empty_json() -> Self {
        Self::Json(Vec::new())
    }

    /// A multipart body with one file part and the given extra fields.
    #[must_use]
    pub fn multipart(file: MultipartFile, fields: Vec<(String, String)>) -> Self {
        Self::Multipart(MultipartUpload { file, fields })
    }

    /// Returns the content type header this body requires, if the transport
    /// does not set one itself.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
            Self::Multipart(_) => None,
        }
    }
}

/// A request relative to a resource client's path prefix.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use schlep_engine::clients::{HttpMethod, HttpRequest, RequestBody};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/jobs")
///     .query_param("page", "1")
///     .query_param_opt("status", None::<String>)
///     .build();
/// assert_eq!(request.query, vec![("page".to_string(), "1".to_string())]);
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/process")
///     .body(RequestBody::json(&json!({"processing_mode": "batch"})).unwrap())
///     .build();
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the resource prefix; a leading `/` is optional.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Vec<(String, String)>,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a query parameter only when a value is present.
    #[must_use]
    pub fn query_param_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.query_param(key, value),
            None => self,
        }
    }

    /// Adds every present pair, skipping pairs whose value is `None`.
    #[must_use]
    pub fn query_params<I, K, V>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        params
            .into_iter()
            .fold(self, |builder, (key, value)| builder.query_param_opt(key, value))
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
        }
    }
}

/// A fully assembled outgoing request: method, absolute URL, headers and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including query parameters.
    pub url: reqwest::Url,
    /// Headers to send, keyed by canonical name.
    pub headers: HashMap<String, String>,
    /// The encoded body, if any.
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the body is a multipart form.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self.body, Some(RequestBody::Multipart(_)))
    }
}

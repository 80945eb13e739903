//! Path-prefix binding shared by every resource client.
//!
//! A [`ResourceClient`] pairs a borrowed [`HttpClient`] with the path prefix
//! of one API resource (`/data`, `/ml`, ...). The typed resource clients in
//! [`crate::resources`] are thin wrappers over it.

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::{InvalidRequestError, SchlepError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartFile, RequestBody};
use crate::clients::http_response::ResponseFuture;

/// A view of the shared transport bound to one resource prefix.
///
/// Cheap to construct and `Copy`; it never owns the transport.
///
/// # Example
///
/// ```rust,ignore
/// let resource = ResourceClient::new(&http, "/ml");
/// let models = resource.get_with_query("/models", [("page", Some("1".to_string()))])?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ResourceClient<'a> {
    http: &'a HttpClient,
    base_path: &'static str,
}

impl<'a> ResourceClient<'a> {
    /// Binds `http` to the resource prefix `base_path` (empty for top-level endpoints).
    #[must_use]
    pub const fn new(http: &'a HttpClient, base_path: &'static str) -> Self {
        Self { http, base_path }
    }

    /// Returns the resource prefix.
    #[must_use]
    pub const fn base_path(&self) -> &'static str {
        self.base_path
    }

    /// Returns the absolute URL for `path` under this resource, without sending anything.
    #[must_use]
    pub fn build_url(&self, path: &str) -> String {
        self.http.build_url(self.base_path, path)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub fn get(&self, path: &str) -> Result<Value, SchlepError> {
        self.send(HttpRequest::builder(HttpMethod::Get, path).build())
    }

    /// Sends a GET request with query parameters, skipping absent values.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub fn get_with_query<I, K, V>(&self, path: &str, params: I) -> Result<Value, SchlepError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.send(
            HttpRequest::builder(HttpMethod::Get, path)
                .query_params(params)
                .build(),
        )
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Json`] if `body` cannot be serialized, otherwise
    /// see [`HttpClient::execute`].
    pub fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, SchlepError> {
        self.send_json(HttpMethod::Post, path, body)
    }

    /// Sends a POST request whose body is JSON text passed through unchanged.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub fn post_raw(&self, path: &str, json: impl Into<String>) -> Result<Value, SchlepError> {
        self.send(
            HttpRequest::builder(HttpMethod::Post, path)
                .body(RequestBody::raw_json(json))
                .build(),
        )
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Json`] if `body` cannot be serialized, otherwise
    /// see [`HttpClient::execute`].
    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, SchlepError> {
        self.send_json(HttpMethod::Put, path, body)
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Json`] if `body` cannot be serialized, otherwise
    /// see [`HttpClient::execute`].
    pub fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, SchlepError> {
        self.send_json(HttpMethod::Patch, path, body)
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub fn delete(&self, path: &str) -> Result<Value, SchlepError> {
        self.send(HttpRequest::builder(HttpMethod::Delete, path).build())
    }

    /// Sends a multipart POST with one `file` part followed by `fields` in order.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub fn post_multipart(
        &self,
        path: &str,
        file: MultipartFile,
        fields: Vec<(String, String)>,
    ) -> Result<Value, SchlepError> {
        self.send(
            HttpRequest::builder(HttpMethod::Post, path)
                .body(RequestBody::multipart(file, fields))
                .build(),
        )
    }

    /// Dispatches a request on the worker pool, choosing the method by name.
    ///
    /// Accepts `GET`, `POST`, `PUT` and `DELETE` in any case. Without a body,
    /// `POST` sends an empty JSON-typed payload and `PUT` sends `null`; `GET`
    /// and `DELETE` ignore `body`. Any other method resolves to
    /// [`InvalidRequestError::InvalidMethod`] without touching the network.
    pub fn execute_async<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: &str,
        body: Option<&B>,
    ) -> ResponseFuture {
        match async_request(path, method, body) {
            Ok(request) => match self.http.prepare(self.base_path, request) {
                Ok(descriptor) => self.http.execute_async(descriptor),
                Err(e) => ResponseFuture::ready(Err(e.into())),
            },
            Err(e) => ResponseFuture::ready(Err(e)),
        }
    }

    fn send_json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<Value, SchlepError> {
        self.send(
            HttpRequest::builder(method, path)
                .body(RequestBody::json(body)?)
                .build(),
        )
    }

    fn send(&self, request: HttpRequest) -> Result<Value, SchlepError> {
        let descriptor = self.http.prepare(self.base_path, request)?;
        self.http.execute(descriptor)
    }
}

/// Resolves the method name and body of an asynchronous request.
fn async_request<B: Serialize + ?Sized>(
    path: &str,
    method: &str,
    body: Option<&B>,
) -> Result<HttpRequest, SchlepError> {
    let http_method = match method.parse::<HttpMethod>() {
        Ok(m @ (HttpMethod::Get | HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete)) => m,
        _ => {
            return Err(InvalidRequestError::InvalidMethod {
                method: method.to_string(),
            }
            .into())
        }
    };

    let builder = HttpRequest::builder(http_method, path);
    let body = match (http_method, body) {
        (HttpMethod::Post | HttpMethod::Put, Some(body)) => Some(RequestBody::json(body)?),
        (HttpMethod::Post, None) => Some(RequestBody::empty_json()),
        (HttpMethod::Put, None) => Some(RequestBody::json(&Value::Null)?),
        _ => None,
    };
    Ok(match body {
        Some(body) => builder.body(body).build(),
        None => builder.build(),
    })
}

//! Response classification and the asynchronous response handle.
//!
//! Both executors share [`parse_response`]: a 2xx status yields the parsed
//! JSON body untouched, anything else becomes an [`ApiError`].

use std::future::{self, Future};
use std::pin::Pin;
use std::task::{Context, Poll};

use serde_json::Value;
use tokio::task::JoinHandle;

use crate::clients::errors::{ApiError, SchlepError};

/// Returns `true` if the status code is in the 2xx range.
#[must_use]
pub const fn is_success(code: u16) -> bool {
    code >= 200 && code <= 299
}

/// Classifies a response by status code and decodes its body.
///
/// - 2xx: the body parsed as JSON, with no envelope unwrapping. An empty
///   body yields an empty object.
/// - anything else: [`SchlepError::Api`] built by [`ApiError::from_response`].
///
/// # Errors
///
/// Returns [`SchlepError::Api`] for non-2xx codes and [`SchlepError::Json`]
/// if a 2xx body is not valid JSON.
pub fn parse_response(code: u16, body: &str) -> Result<Value, SchlepError> {
    if !is_success(code) {
        return Err(ApiError::from_response(code, body).into());
    }

    if body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    Ok(serde_json::from_str(body)?)
}

/// Handle to a request dispatched on the client's worker pool.
///
/// The request starts as soon as the handle is created; awaiting it only
/// collects the outcome. Dropping the handle does not cancel the request.
///
/// # Example
///
/// ```rust,ignore
/// let pending = client.ml().train_pipeline_async("pipe_1", None, None);
/// // ... other work while the request runs ...
/// let job = pending.await?;
/// ```
#[derive(Debug)]
#[must_use = "the outcome of the request is only observable by awaiting the handle"]
pub struct ResponseFuture {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    Ready(future::Ready<Result<Value, SchlepError>>),
    Dispatched(JoinHandle<Result<Value, SchlepError>>),
}

impl ResponseFuture {
    /// Wraps a task spawned on the worker pool.
    pub(crate) const fn dispatched(handle: JoinHandle<Result<Value, SchlepError>>) -> Self {
        Self {
            inner: Inner::Dispatched(handle),
        }
    }

    /// A handle that resolves immediately, without any network I/O.
    pub(crate) fn ready(result: Result<Value, SchlepError>) -> Self {
        Self {
            inner: Inner::Ready(future::ready(result)),
        }
    }
}

impl Future for ResponseFuture {
    type Output = Result<Value, SchlepError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.inner {
            Inner::Ready(ready) => Pin::new(ready).poll(cx),
            Inner::Dispatched(handle) => Pin::new(handle)
                .poll(cx)
                .map(|joined| joined.unwrap_or_else(|e| Err(SchlepError::Dispatch(e)))),
        }
    }
}

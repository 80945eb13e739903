//! HTTP transport for Schlep-engine API communication.
//!
//! This module provides the [`HttpClient`] type: one pooled reqwest client
//! and one dispatch worker pool, shared by every resource client of a
//! [`SchlepClient`](crate::SchlepClient).

use std::collections::HashMap;
use std::future::Future;
use std::sync::mpsc::{self as std_mpsc, SendError};

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::clients::errors::{InvalidRequestError, SchlepError};
use crate::clients::http_request::{HttpRequest, RequestBody, RequestDescriptor, JSON_CONTENT_TYPE};
use crate::clients::http_response::{parse_response, ResponseFuture};
use crate::config::SchlepConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name given to the dispatch worker threads.
const WORKER_THREAD_NAME: &str = "schlep-dispatch";

/// Name of the thread that waits out in-flight requests after shutdown.
const DRAIN_THREAD_NAME: &str = "schlep-drain";

/// HTTP transport for making requests to the Schlep-engine API.
///
/// The client handles:
/// - URL composition from the base URL, a resource prefix and a path
/// - Default headers including the bearer token and User-Agent
/// - Blocking dispatch with [`execute`](Self::execute)
/// - Non-blocking dispatch on the worker pool with [`execute_async`](Self::execute_async)
///
/// Timeouts are fixed when the client is built. There is no retry logic.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Concurrent requests share one connection pool.
#[derive(Debug)]
pub struct HttpClient {
    /// The pooled reqwest client.
    client: reqwest::Client,
    /// Worker pool driving every request. `None` once shut down.
    pool: Option<WorkerPool>,
    /// Base URL without trailing slash (e.g., `https://api.schlep-engine.com/v1`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the reqwest client or the
    /// worker pool cannot be created.
    pub fn new(config: &SchlepConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Schlep-engine Rust SDK v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert(AUTHORIZATION.to_string(), config.api_key().bearer());
        default_headers.insert(ACCEPT.to_string(), JSON_CONTENT_TYPE.to_string());
        default_headers.insert(USER_AGENT.to_string(), user_agent);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        let pool =
            WorkerPool::new(config.worker_threads()).map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            pool: Some(pool),
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` once [`shutdown`](Self::shutdown) has been called.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.pool.is_none()
    }

    /// Composes `base + prefix + path`, inserting a `/` before `path` when missing.
    #[must_use]
    pub fn build_url(&self, prefix: &str, path: &str) -> String {
        if path.starts_with('/') || path.is_empty() {
            format!("{}{prefix}{path}", self.base_url)
        } else {
            format!("{}{prefix}/{path}", self.base_url)
        }
    }

    /// Assembles the outgoing request for `request` under `prefix`.
    ///
    /// Every descriptor carries the bearer token. `Content-Type:
    /// application/json` is added for JSON bodies only; multipart bodies get
    /// their boundary header from the transport.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::InvalidUrl`] if the composed URL does not parse.
    pub fn prepare(
        &self,
        prefix: &str,
        request: HttpRequest,
    ) -> Result<RequestDescriptor, InvalidRequestError> {
        let raw_url = self.build_url(prefix, &request.path);
        let mut url =
            reqwest::Url::parse(&raw_url).map_err(|_| InvalidRequestError::InvalidUrl {
                url: raw_url.clone(),
            })?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut headers = self.default_headers.clone();
        if let Some(content_type) = request.body.as_ref().and_then(RequestBody::content_type) {
            headers.insert(CONTENT_TYPE.to_string(), content_type.to_string());
        }

        Ok(RequestDescriptor {
            method: request.http_method,
            url,
            headers,
            body: request.body,
        })
    }

    /// Sends a request and blocks the calling thread until it completes.
    ///
    /// Must not be called from inside an async runtime; use
    /// [`execute_async`](Self::execute_async) there.
    ///
    /// # Errors
    ///
    /// - [`SchlepError::Api`] for non-2xx responses
    /// - [`SchlepError::Network`] for connection failures and timeouts
    /// - [`SchlepError::Json`] if a 2xx body is not valid JSON
    /// - [`InvalidRequestError::ClientClosed`] after [`shutdown`](Self::shutdown)
    pub fn execute(&self, descriptor: RequestDescriptor) -> Result<Value, SchlepError> {
        let pool = self.pool.as_ref().ok_or(InvalidRequestError::ClientClosed)?;
        pool.runtime.block_on(dispatch(self.client.clone(), descriptor))
    }

    /// Spawns a request on the worker pool and returns a handle to its outcome.
    ///
    /// The request is in flight once this returns, whether or not the handle
    /// is awaited. Errors are the same as for [`execute`](Self::execute); after
    /// shutdown the handle resolves to [`InvalidRequestError::ClientClosed`]
    /// without any network I/O.
    pub fn execute_async(&self, descriptor: RequestDescriptor) -> ResponseFuture {
        match &self.pool {
            Some(pool) => {
                ResponseFuture::dispatched(pool.spawn(dispatch(self.client.clone(), descriptor)))
            }
            None => ResponseFuture::ready(Err(InvalidRequestError::ClientClosed.into())),
        }
    }

    /// Stops accepting requests and releases the worker pool.
    ///
    /// Returns immediately. Requests already dispatched with
    /// [`execute_async`](Self::execute_async) keep running and resolve
    /// normally; the pool is torn down on a background thread once the last
    /// of them finishes. Safe to call from any context, including inside an
    /// async runtime.
    pub fn shutdown(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.close();
            tracing::debug!("Schlep-engine transport shut down");
        }
    }
}

impl Drop for HttpClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// The dispatch runtime plus a count of requests still running on it.
///
/// Every spawned request holds a clone of `in_flight`; `drained` yields
/// `None` once the last clone is dropped.
#[derive(Debug)]
struct WorkerPool {
    runtime: Runtime,
    in_flight: mpsc::Sender<()>,
    drained: mpsc::Receiver<()>,
}

impl WorkerPool {
    fn new(worker_threads: Option<usize>) -> std::io::Result<Self> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.thread_name(WORKER_THREAD_NAME).enable_all();
        if let Some(threads) = worker_threads {
            builder.worker_threads(threads);
        }
        let runtime = builder.build()?;
        let (in_flight, drained) = mpsc::channel(1);

        Ok(Self {
            runtime,
            in_flight,
            drained,
        })
    }

    fn spawn<F>(&self, request: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let in_flight = self.in_flight.clone();
        self.runtime.spawn(async move {
            let output = request.await;
            drop(in_flight);
            output
        })
    }

    /// Hands the runtime to a drain thread that shuts it down once every
    /// spawned request has finished.
    fn close(self) {
        let Self {
            runtime,
            in_flight,
            mut drained,
        } = self;
        drop(in_flight);

        let (hand_off, inbox) = std_mpsc::channel::<Runtime>();
        let drain = std::thread::Builder::new()
            .name(DRAIN_THREAD_NAME.to_string())
            .spawn(move || {
                if let Ok(runtime) = inbox.recv() {
                    runtime.block_on(drained.recv());
                    runtime.shutdown_background();
                }
            });

        match drain {
            Ok(_) => {
                if let Err(SendError(runtime)) = hand_off.send(runtime) {
                    runtime.shutdown_background();
                }
            }
            Err(e) => {
                tracing::warn!("Could not start drain thread, cancelling in-flight requests: {e}");
                runtime.shutdown_background();
            }
        }
    }
}

/// Sends one request and classifies the response.
async fn dispatch(
    client: reqwest::Client,
    descriptor: RequestDescriptor,
) -> Result<Value, SchlepError> {
    tracing::debug!("Executing {} request to {}", descriptor.method, descriptor.url);

    let mut builder = client.request(descriptor.method.into(), descriptor.url);
    for (key, value) in &descriptor.headers {
        builder = builder.header(key, value);
    }

    builder = match descriptor.body {
        Some(RequestBody::Json(bytes)) => builder.body(bytes),
        Some(RequestBody::Multipart(upload)) => builder.multipart(upload.into_form().await?),
        None => builder,
    };

    let response = builder.send().await?;
    let code = response.status().as_u16();
    let body_text = response.text().await?;

    parse_response(code, &body_text)
}

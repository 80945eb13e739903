//! System monitoring resource client.

use crate::clients::{decode, HttpClient, ResourceClient, SchlepError};
use crate::types::JsonObject;

/// Client for the `/monitoring` resource.
#[derive(Clone, Copy, Debug)]
pub struct MonitoringClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> MonitoringClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/monitoring";

    /// Creates a monitoring client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Returns the platform health summary.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn system_health(&self) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get("/health")?)
    }

    /// Returns metrics, optionally restricted by name and time range.
    ///
    /// Metric names are sent comma-joined as `metrics`; each time range entry
    /// (e.g., `start`, `end`) becomes its own query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn metrics(
        &self,
        metric_names: Option<&[&str]>,
        time_range: Option<&[(&str, &str)]>,
    ) -> Result<JsonObject, SchlepError> {
        let mut params = vec![(
            "metrics".to_string(),
            metric_names
                .filter(|names| !names.is_empty())
                .map(|names| names.join(",")),
        )];
        params.extend(
            time_range
                .unwrap_or_default()
                .iter()
                .map(|(key, value)| ((*key).to_string(), Some((*value).to_string()))),
        );
        decode(&self.base.get_with_query("/metrics", params)?)
    }

    /// Returns all metrics.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn all_metrics(&self) -> Result<JsonObject, SchlepError> {
        self.metrics(None, None)
    }
}

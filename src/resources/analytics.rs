//! Analytics resource client.

use crate::clients::{decode, Envelope, HttpClient, ResourceClient, SchlepError};
use crate::types::JsonObject;

/// Client for the `/analytics` resource.
#[derive(Clone, Copy, Debug)]
pub struct AnalyticsClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> AnalyticsClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/analytics";

    /// Creates an analytics client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Runs an analytics query.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn query(&self, query: &JsonObject) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post("/query", query)?)
    }

    /// Lists the datasets available for querying.
    ///
    /// Entries are read from `data.datasets`, falling back to `data` and then
    /// to the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn datasets(&self) -> Result<Vec<JsonObject>, SchlepError> {
        Envelope::DataField("datasets").decode(&self.base.get("/datasets")?)
    }

    /// Returns the schema of a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn schema(&self, dataset: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get(&format!("/datasets/{dataset}/schema"))?)
    }
}

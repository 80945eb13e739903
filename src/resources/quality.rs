//! Data quality resource client.

use serde_json::json;

use crate::clients::{decode, HttpClient, ResourceClient, SchlepError};
use crate::types::JsonObject;

/// Client for the `/quality` resource.
#[derive(Clone, Copy, Debug)]
pub struct QualityClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> QualityClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/quality";

    /// Creates a quality client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Assesses the quality of stored data.
    ///
    /// `checks` is omitted from the body when `None` or empty, which lets the
    /// API run its default checks.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn assess_quality(
        &self,
        data_path: &str,
        checks: Option<&[&str]>,
    ) -> Result<JsonObject, SchlepError> {
        let mut body = JsonObject::new();
        body.insert("data_path".to_string(), json!(data_path));
        if let Some(checks) = checks.filter(|c| !c.is_empty()) {
            body.insert("checks".to_string(), json!(checks));
        }
        decode(&self.base.post("/assess", &body)?)
    }

    /// Returns a quality report.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn report(&self, report_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get(&format!("/reports/{report_id}"))?)
    }
}

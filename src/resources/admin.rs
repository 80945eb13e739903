//! Administration resource client.

use crate::clients::{decode, HttpClient, ResourceClient, SchlepError};
use crate::types::JsonObject;

use super::page_params;

/// Client for the `/admin` resource. Requires an administrator API key.
#[derive(Clone, Copy, Debug)]
pub struct AdminClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> AdminClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/admin";

    /// Creates an admin client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Returns platform-wide statistics.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn system_stats(&self) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get("/stats")?)
    }

    /// Lists platform users.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_users(&self, page: u32, page_size: u32) -> Result<Vec<JsonObject>, SchlepError> {
        decode(&self.base.get_with_query("/users", page_params(page, page_size))?)
    }
}

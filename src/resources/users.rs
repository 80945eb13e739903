//! User profile resource client.

use crate::clients::{decode, HttpClient, ResourceClient, SchlepError};
use crate::types::JsonObject;

/// Client for the `/users` resource.
#[derive(Clone, Copy, Debug)]
pub struct UsersClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> UsersClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/users";

    /// Creates a users client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Returns the profile of the user owning the API key.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn profile(&self) -> Result<JsonObject, SchlepError> {
        decode(&self.base.get("/me")?)
    }

    /// Partially updates the current user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn update_profile(&self, updates: &JsonObject) -> Result<JsonObject, SchlepError> {
        decode(&self.base.patch("/me", updates)?)
    }
}

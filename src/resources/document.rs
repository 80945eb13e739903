//! Document extraction resource client.
//!
//! Documents are sent as multipart uploads with the file under the `file`
//! part name.

use crate::clients::{decode, HttpClient, MultipartFile, ResourceClient, SchlepError};
use crate::types::JsonObject;

/// Client for the `/extract` resource.
#[derive(Clone, Copy, Debug)]
pub struct DocumentClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> DocumentClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/extract";

    /// Creates a document client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Extracts text from a document.
    ///
    /// The flags are sent as the form fields `extract_tables` and
    /// `extract_images` with the values `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn extract_text(
        &self,
        file: MultipartFile,
        extract_tables: bool,
        extract_images: bool,
    ) -> Result<JsonObject, SchlepError> {
        let fields = vec![
            ("extract_tables".to_string(), extract_tables.to_string()),
            ("extract_images".to_string(), extract_images.to_string()),
        ];
        decode(&self.base.post_multipart("/text", file, fields)?)
    }

    /// Extracts text and tables, but not images.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn extract_text_default(&self, file: MultipartFile) -> Result<JsonObject, SchlepError> {
        self.extract_text(file, true, false)
    }

    /// Extracts tables from a document.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn extract_tables(&self, file: MultipartFile) -> Result<JsonObject, SchlepError> {
        decode(&self.base.post_multipart("/tables", file, Vec::new())?)
    }
}

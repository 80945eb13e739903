//! File storage resource client.

use crate::clients::{decode, HttpClient, MultipartFile, ResourceClient, SchlepError};
use crate::types::{FileUpload, JsonObject};

use super::page_params;

/// Client for the `/storage` resource.
#[derive(Clone, Copy, Debug)]
pub struct StorageClient<'a> {
    base: ResourceClient<'a>,
}

impl<'a> StorageClient<'a> {
    /// Path prefix of this resource.
    pub const PATH_PREFIX: &'static str = "/storage";

    /// Creates a storage client over the shared transport.
    #[must_use]
    pub const fn new(http: &'a HttpClient) -> Self {
        Self {
            base: ResourceClient::new(http, Self::PATH_PREFIX),
        }
    }

    /// Uploads a file, optionally into a folder.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn upload_file(
        &self,
        file: MultipartFile,
        folder: Option<&str>,
    ) -> Result<FileUpload, SchlepError> {
        let fields = folder
            .map(|folder| vec![("folder".to_string(), folder.to_string())])
            .unwrap_or_default();
        decode(&self.base.post_multipart("/upload", file, fields)?)
    }

    /// Lists stored files, optionally only those in a folder.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn list_files(
        &self,
        folder: Option<&str>,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<FileUpload>, SchlepError> {
        let mut params = vec![("folder", folder.map(str::to_string))];
        params.extend(page_params(page, page_size));
        decode(&self.base.get_with_query("/files", params)?)
    }

    /// Deletes a stored file.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError`] if the request fails.
    pub fn delete_file(&self, file_id: &str) -> Result<JsonObject, SchlepError> {
        decode(&self.base.delete(&format!("/files/{file_id}"))?)
    }
}

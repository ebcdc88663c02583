//! Listing and content API.
//!
//! [`FileApi`] is the seam between the controller and the network. The app
//! uses [`HttpFileApi`]; tests plug in an in-memory implementation.

use crate::config::{API_BASE, CONTENT_PATH, FILES_PATH, FOLDERS_PATH};
use crate::core::error::FetchError;
use crate::models::{ContentResponse, FileEntry, Folder};
use crate::utils::fetch_json;

/// Calls the controller needs from the server.
#[allow(async_fn_in_trait)]
pub trait FileApi {
    /// `GET /api/folders`
    async fn list_folders(&self) -> Result<Vec<Folder>, FetchError>;

    /// `GET /api/files/{folder}`, newest first.
    async fn list_files(&self, folder: &str) -> Result<Vec<FileEntry>, FetchError>;

    /// `GET /api/content/{folder}/{file}`
    async fn fetch_content(&self, folder: &str, file: &str)
    -> Result<ContentResponse, FetchError>;
}

/// [`FileApi`] over the browser Fetch API.
#[derive(Clone, Copy, Debug)]
pub struct HttpFileApi {
    base: &'static str,
}

impl HttpFileApi {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub fn folders_url(&self) -> String {
        format!("{}{}", self.base, FOLDERS_PATH)
    }

    pub fn files_url(&self, folder: &str) -> String {
        format!("{}{}/{}", self.base, FILES_PATH, folder)
    }

    pub fn content_url(&self, folder: &str, file: &str) -> String {
        format!("{}{}/{}/{}", self.base, CONTENT_PATH, folder, file)
    }
}

impl Default for HttpFileApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl FileApi for HttpFileApi {
    async fn list_folders(&self) -> Result<Vec<Folder>, FetchError> {
        fetch_json(&self.folders_url()).await
    }

    async fn list_files(&self, folder: &str) -> Result<Vec<FileEntry>, FetchError> {
        fetch_json(&self.files_url(folder)).await
    }

    async fn fetch_content(
        &self,
        folder: &str,
        file: &str,
    ) -> Result<ContentResponse, FetchError> {
        fetch_json(&self.content_url(folder, file)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_same_origin() {
        let api = HttpFileApi::default();
        assert_eq!(api.folders_url(), "/api/folders");
        assert_eq!(api.files_url("news"), "/api/files/news");
        assert_eq!(
            api.content_url("news", "2024-01-01.md"),
            "/api/content/news/2024-01-01.md"
        );
    }

    #[test]
    fn test_urls_with_base() {
        let api = HttpFileApi::new("http://localhost:5000");
        assert_eq!(
            api.files_url("fund_analysis"),
            "http://localhost:5000/api/files/fund_analysis"
        );
    }
}

//! Anonymous file-host upload client.
//!
//! One unauthenticated multipart POST per file. Success is a 2xx status
//! with a JSON body carrying a `link` field; any other status is an
//! upload failure and is never retried.

use serde::Deserialize;
use std::path::Path;

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Client for the configured hosting endpoint.
#[derive(Debug, Clone)]
pub struct HostClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct HostResponse {
    link: Option<String>,
}

impl HostClient {
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config::network::timeout())
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Client pointed at the endpoint from configuration.
    pub fn from_config() -> AppResult<Self> {
        Self::new(config::UPLOAD_ENDPOINT.clone())
    }

    /// Uploads one file and returns the public link.
    ///
    /// # Errors
    /// * [`AppError::HttpStatus`] on any non-success status
    /// * [`AppError::Upload`] when the body carries no link
    pub async fn upload(&self, path: &Path) -> AppResult<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.bin")
            .to_string();

        log::info!("Uploading {} ({} bytes) to {}", file_name, bytes.len(), self.endpoint);

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self.http.post(&self.endpoint).multipart(form).send().await?;
        if !resp.status().is_success() {
            return Err(AppError::HttpStatus(resp.status()));
        }

        let body: HostResponse = resp.json().await?;
        body.link
            .ok_or_else(|| AppError::Upload("host response has no link field".to_string()))
    }
}

//! Dropbox content API client

use super::ObjectStore;
use crate::config::{DropboxConfig, SecretString};
use crate::domain::{Result, SyncError};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

/// Argument header of `/2/files/upload`
#[derive(Debug, Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'a str,
    autorename: bool,
    mute: bool,
}

/// Uploads files into one Dropbox folder
pub struct DropboxClient {
    /// OAuth access token
    access_token: SecretString,
    /// Destination folder without trailing slash
    folder: String,
    /// Content API endpoint
    content_url: String,
    /// HTTP client for API calls
    http_client: reqwest::Client,
}

impl DropboxClient {
    /// Create a new Dropbox client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &DropboxConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| SyncError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            access_token: config.access_token.clone(),
            folder: config.folder.trim_end_matches('/').to_string(),
            content_url: config.content_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Remote path for a file name
    pub fn remote_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.folder, file_name)
    }
}

#[async_trait]
impl ObjectStore for DropboxClient {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let path = self.remote_path(file_name);
        let arg = UploadArg {
            path: &path,
            mode: "overwrite",
            autorename: false,
            mute: true,
        };
        let arg_header = header_safe_json(&serde_json::to_string(&arg)?);

        let url = format!("{}/2/files/upload", self.content_url);
        let token: &str = self.access_token.expose_secret().as_str();
        debug!(url = %url, path = %path, bytes = bytes.len(), "Uploading file to Dropbox");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .header("Dropbox-API-Arg", arg_header)
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| SyncError::Storage(format!("Failed to reach Dropbox: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            info!(path = %path, "Uploaded export to Dropbox");
            Ok(path)
        } else {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_body, "Dropbox upload failed");
            Err(SyncError::Storage(format!(
                "Dropbox upload of {} failed with status {}: {}",
                path, status, error_body
            )))
        }
    }
}

/// Escapes non-ASCII characters so the JSON fits in an HTTP header
fn header_safe_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

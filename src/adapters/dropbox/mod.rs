//! Dropbox cloud storage integration
//!
//! The export CSV is pushed to Dropbox through the content API. The pipeline
//! only depends on the [`ObjectStore`] trait.

pub mod client;

pub use client::DropboxClient;

use crate::domain::Result;
use async_trait::async_trait;

/// A remote store that accepts whole files
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `file_name` in the configured folder, replacing
    /// any existing file. Returns the remote path.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Storage` if the upload is rejected.
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String>;
}

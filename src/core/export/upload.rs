//! Upload of an export file to the object store

use crate::adapters::dropbox::ObjectStore;
use crate::domain::{Result, SyncError};
use std::path::Path;

/// Read `path` and store it under its file name
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read and propagates the
/// store's error if the upload fails.
pub async fn upload_export(store: &dyn ObjectStore, path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| SyncError::Export(format!("Not a file path: {}", path.display())))?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(file = %file_name, bytes = bytes.len(), "Uploading export");

    store.upload(&file_name, bytes).await
}

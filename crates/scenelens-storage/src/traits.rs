//! Storage abstraction trait
//!
//! This module defines the Storage trait shared by the upload receiver (writer) and the
//! cleanup sweeper (reader/deleter).

use async_trait::async_trait;
use scenelens_core::{AppError, UploadRecord};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// A file currently held in transient storage
#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub key: String,
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Transient upload storage.
///
/// No locking is applied between writers and the sweeper: a file may disappear between
/// being stored and being served back, which shows up as a broken image, not an error.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write an upload under a fresh, collision-resistant key
    async fn store(&self, original_name: &str, data: &[u8]) -> StorageResult<UploadRecord>;

    /// Enumerate stored files. Entries whose metadata cannot be read are skipped.
    async fn list(&self) -> StorageResult<Vec<StoredEntry>>;

    /// Delete a listed entry by its path. The key is only used for reporting, so entries
    /// whose names were never produced by `store` are still removable.
    async fn delete_entry(&self, entry: &StoredEntry) -> StorageResult<()>;

    /// Directory holding the stored files
    fn root(&self) -> &Path;
}

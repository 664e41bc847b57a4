use crate::keys;
use crate::traits::{Storage, StorageError, StorageResult, StoredEntry};
use async_trait::async_trait;
use chrono::Utc;
use scenelens_core::UploadRecord;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Directory holding transient uploads (e.g., "uploads")
    /// * `base_url` - Public path prefix the directory is served under (e.g., "/uploads")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: impl Into<String>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url: base_url.into(),
        })
    }

    /// Convert storage key to filesystem path, rejecting keys that escape the base directory
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if !keys::is_valid_key(storage_key) {
            return Err(StorageError::InvalidKey(format!(
                "Storage key contains invalid characters: {}",
                storage_key
            )));
        }
        Ok(self.base_path.join(storage_key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store(&self, original_name: &str, data: &[u8]) -> StorageResult<UploadRecord> {
        let key = keys::generate_key(original_name);
        let path = self.key_to_path(&key)?;
        let start = std::time::Instant::now();

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            key = %key,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Stored transient upload"
        );

        Ok(UploadRecord {
            public_path: self.generate_url(&key),
            stored_path: path,
            original_name: original_name.to_string(),
            created_at: Utc::now(),
        })
    }

    async fn list(&self) -> StorageResult<Vec<StoredEntry>> {
        let mut dir = fs::read_dir(&self.base_path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::debug!(error = %e, path = %path.display(), "Skipping unreadable entry");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::debug!(error = %e, path = %path.display(), "Skipping entry without mtime");
                    continue;
                }
            };

            entries.push(StoredEntry {
                key: entry.file_name().to_string_lossy().into_owned(),
                path,
                modified,
            });
        }

        Ok(entries)
    }

    async fn delete_entry(&self, entry: &StoredEntry) -> StorageResult<()> {
        if entry.path.parent() != Some(self.base_path.as_path()) {
            return Err(StorageError::InvalidKey(format!(
                "Entry is outside the storage root: {}",
                entry.path.display()
            )));
        }

        match fs::remove_file(&entry.path).await {
            Ok(()) => {
                tracing::debug!(path = %entry.path.display(), key = %entry.key, "Deleted transient upload");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(entry.key.clone()))
            }
            Err(e) => Err(StorageError::DeleteFailed(format!(
                "Failed to delete file {}: {}",
                entry.path.display(),
                e
            ))),
        }
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}

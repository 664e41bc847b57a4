use scenelens_core::CleanupConfig;
use scenelens_storage::{Storage, StorageError};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::{interval, MissedTickBehavior};

/// Outcome of one sweep over transient storage
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: usize,
    pub deleted: usize,
    pub skipped: usize,
}

/// Periodically deletes transient uploads older than the retention window.
///
/// Best-effort: a failure on one entry is logged and skipped, never aborting the sweep.
#[derive(Clone)]
pub struct CleanupService {
    storage: Arc<dyn Storage>,
    interval: Duration,
    retention: Duration,
}

impl CleanupService {
    pub fn new(storage: Arc<dyn Storage>, config: &CleanupConfig) -> Self {
        Self {
            storage,
            interval: config.interval,
            retention: config.retention,
        }
    }

    /// Start the background sweep task, independent of request handling.
    /// Returns a JoinHandle for graceful shutdown
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut cleanup_interval = interval(self.interval);
            cleanup_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            tracing::info!(
                interval_secs = self.interval.as_secs_f64(),
                retention_secs = self.retention.as_secs_f64(),
                root = %self.storage.root().display(),
                "Upload cleanup task started"
            );

            loop {
                cleanup_interval.tick().await;
                self.sweep().await;
            }
        })
    }

    /// Sweep transient storage now
    pub async fn sweep(&self) -> SweepReport {
        self.sweep_at(SystemTime::now()).await
    }

    /// Sweep, measuring entry age against `now`
    #[tracing::instrument(skip(self, now), fields(cleanup.operation = "expire_uploads"))]
    pub async fn sweep_at(&self, now: SystemTime) -> SweepReport {
        let mut report = SweepReport::default();

        let entries = match self.storage.list().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "Could not list upload directory, skipping sweep");
                return report;
            }
        };

        for entry in entries {
            report.scanned += 1;

            // mtime in the future (clock skew) counts as age zero
            let age = now.duration_since(entry.modified).unwrap_or_default();
            if age <= self.retention {
                continue;
            }

            match self.storage.delete_entry(&entry).await {
                Ok(()) => {
                    report.deleted += 1;
                    tracing::info!(
                        key = %entry.key,
                        age_secs = age.as_secs(),
                        "Auto-deleted old upload"
                    );
                }
                Err(StorageError::NotFound(_)) => {
                    report.skipped += 1;
                    tracing::debug!(key = %entry.key, "Upload already removed");
                }
                Err(e) => {
                    report.skipped += 1;
                    tracing::debug!(error = %e, key = %entry.key, "Failed to delete old upload, continuing");
                }
            }
        }

        if report.deleted > 0 || report.skipped > 0 {
            tracing::info!(
                scanned = report.scanned,
                deleted = report.deleted,
                skipped = report.skipped,
                "Upload cleanup completed"
            );
        } else {
            tracing::debug!(scanned = report.scanned, "Upload cleanup completed");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use scenelens_core::UploadRecord;
    use scenelens_storage::{LocalStorage, StorageResult, StoredEntry};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn config(interval_ms: u64, retention_ms: u64) -> CleanupConfig {
        CleanupConfig {
            enabled: true,
            interval: Duration::from_millis(interval_ms),
            retention: Duration::from_millis(retention_ms),
        }
    }

    async fn local_storage() -> (TempDir, Arc<LocalStorage>) {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().join("uploads"), "/uploads")
            .await
            .unwrap();
        (temp_dir, Arc::new(storage))
    }

    #[tokio::test]
    async fn test_file_survives_retention_window_then_is_deleted() {
        let (_temp_dir, storage) = local_storage().await;
        let service = CleanupService::new(storage.clone(), &config(30_000, 60_000));

        let record = storage.store("shot.png", b"png").await.unwrap();
        let written_at = SystemTime::now();

        let report = service
            .sweep_at(written_at + Duration::from_secs(30))
            .await;
        assert_eq!(report, SweepReport { scanned: 1, deleted: 0, skipped: 0 });
        assert!(record.stored_path.exists());

        let report = service
            .sweep_at(written_at + Duration::from_secs(90))
            .await;
        assert_eq!(report, SweepReport { scanned: 1, deleted: 1, skipped: 0 });
        assert!(!record.stored_path.exists());
    }

    #[tokio::test]
    async fn test_sweep_empty_directory_is_noop() {
        let (_temp_dir, storage) = local_storage().await;
        let service = CleanupService::new(storage, &config(30_000, 60_000));

        assert_eq!(service.sweep().await, SweepReport::default());
        assert_eq!(service.sweep().await, SweepReport::default());
    }

    #[tokio::test]
    async fn test_sweep_missing_directory_is_noop() {
        let (temp_dir, storage) = local_storage().await;
        std::fs::remove_dir_all(temp_dir.path().join("uploads")).unwrap();
        let service = CleanupService::new(storage, &config(30_000, 60_000));

        assert_eq!(service.sweep().await, SweepReport::default());
    }

    #[tokio::test]
    async fn test_sweep_only_removes_expired_entries() {
        let (_temp_dir, storage) = local_storage().await;
        let service = CleanupService::new(storage.clone(), &config(30_000, 60_000));

        let old = storage.store("old.png", b"old").await.unwrap();
        let now = SystemTime::now() + Duration::from_secs(120);
        let fresh = storage.store("fresh.png", b"fresh").await.unwrap();
        let fresh_mtime = SystemTime::now() + Duration::from_secs(100);
        std::fs::File::options()
            .write(true)
            .open(&fresh.stored_path)
            .unwrap()
            .set_modified(fresh_mtime)
            .unwrap();

        let report = service.sweep_at(now).await;
        assert_eq!(report.deleted, 1);
        assert!(!old.stored_path.exists());
        assert!(fresh.stored_path.exists());
    }

    #[tokio::test]
    async fn test_sweep_removes_entries_with_unusual_names() {
        let (_temp_dir, storage) = local_storage().await;
        let service = CleanupService::new(storage.clone(), &config(30_000, 60_000));

        let odd = storage.root().join("shot..png");
        std::fs::write(&odd, b"png").unwrap();

        let report = service
            .sweep_at(SystemTime::now() + Duration::from_secs(3600))
            .await;
        assert_eq!(report, SweepReport { scanned: 1, deleted: 1, skipped: 0 });
        assert!(!odd.exists());
    }

    /// Storage whose listed entries fail to delete in different ways
    struct FlakyStorage {
        root: PathBuf,
    }

    #[async_trait]
    impl Storage for FlakyStorage {
        async fn store(&self, _original_name: &str, _data: &[u8]) -> StorageResult<UploadRecord> {
            unimplemented!("not used by the sweeper")
        }

        async fn list(&self) -> StorageResult<Vec<StoredEntry>> {
            let modified = SystemTime::UNIX_EPOCH;
            Ok(["gone.png", "locked.png", "ok.png"]
                .iter()
                .map(|key| StoredEntry {
                    key: key.to_string(),
                    path: self.root.join(key),
                    modified,
                })
                .collect())
        }

        async fn delete_entry(&self, entry: &StoredEntry) -> StorageResult<()> {
            match entry.key.as_str() {
                "gone.png" => Err(StorageError::NotFound(entry.key.clone())),
                "locked.png" => Err(StorageError::DeleteFailed("permission denied".to_string())),
                _ => Ok(()),
            }
        }

        fn root(&self) -> &Path {
            &self.root
        }
    }

    #[tokio::test]
    async fn test_sweep_continues_past_failing_entries() {
        let storage = Arc::new(FlakyStorage {
            root: PathBuf::from("/nonexistent"),
        });
        let service = CleanupService::new(storage, &config(30_000, 60_000));

        let report = service.sweep().await;
        assert_eq!(report, SweepReport { scanned: 3, deleted: 1, skipped: 2 });
    }

    #[tokio::test]
    async fn test_background_task_deletes_expired_uploads() {
        let (_temp_dir, storage) = local_storage().await;
        let record = storage.store("shot.png", b"png").await.unwrap();
        let service = Arc::new(CleanupService::new(storage.clone(), &config(20, 1)));

        let handle = service.start();

        let deleted = tokio::time::timeout(Duration::from_secs(5), async {
            while record.stored_path.exists() {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
        .await;

        handle.abort();
        assert!(deleted.is_ok(), "upload was not swept in time");
    }
}

use crate::constants::UPLOADS_ROUTE;
use crate::state::AppState;
use anyhow::{Context, Result};
use scenelens_core::Config;
use scenelens_services::{CleanupService, LocalStorage, SceneLookup, Storage, TraceMoeClient, UploadReceiver};
use std::sync::Arc;

/// Build transient storage, the upload receiver, the recognition client and the sweeper
pub async fn initialize_services(config: &Config) -> Result<Arc<AppState>> {
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir(), UPLOADS_ROUTE)
            .await
            .context("Failed to initialize upload storage")?,
    );
    tracing::info!(path = %config.upload_dir().display(), "Upload storage initialized");

    let receiver = UploadReceiver::new(storage.clone(), config.upload());

    let lookup: Arc<dyn SceneLookup> = Arc::new(TraceMoeClient::new(config.lookup())?);
    tracing::info!(
        base_url = %config.lookup().base_url,
        timeout_secs = config.lookup().timeout.as_secs(),
        "Recognition service client initialized"
    );

    let cleanup = if config.cleanup().enabled {
        Some(Arc::new(CleanupService::new(storage, config.cleanup())))
    } else {
        tracing::warn!("Upload cleanup disabled; transient uploads will accumulate");
        None
    };

    Ok(Arc::new(AppState {
        config: config.clone(),
        receiver,
        lookup,
        cleanup,
    }))
}

//! Application state shared by every handler.

use scenelens_core::Config;
use scenelens_services::{CleanupService, SceneLookup, UploadReceiver};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub receiver: UploadReceiver,
    pub lookup: Arc<dyn SceneLookup>,
    /// Present when the sweeper is enabled; started by the binary, not by `initialize_app`
    pub cleanup: Option<Arc<CleanupService>>,
}

use async_trait::async_trait;
use scenelens_core::{ImageSource, LookupResult, ServiceError};

/// Reverse image search against a scene-recognition backend.
///
/// One call per request, no retries. The returned result is the backend's best match.
#[async_trait]
pub trait SceneLookup: Send + Sync {
    async fn search(&self, source: ImageSource) -> Result<LookupResult, ServiceError>;
}

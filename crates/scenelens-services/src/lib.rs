//! SceneLens Services Layer
//!
//! This crate hosts the request pipeline services (upload receiver, recognition-service
//! client) and the background cleanup sweeper, and re-exports the storage API so that the
//! HTTP crate depends on a single service facade. Keep thin HTTP handling in scenelens-api.

pub mod cleanup;
pub mod lookup;
pub mod upload;

pub use cleanup::{CleanupService, SweepReport};
pub use lookup::{SceneLookup, TraceMoeClient};
pub use scenelens_storage::{LocalStorage, Storage, StorageError, StorageResult, StoredEntry};
pub use upload::{IncomingFile, ReceivedUpload, UploadReceiver};

//! SceneLens Storage Library
//!
//! Transient storage for uploaded images: the [`Storage`] trait and its local
//! filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are flat file names of the form `{stamp}-{sanitized original name}`, where
//! `stamp` is a process-monotonic millisecond timestamp. Keys must not contain `..`
//! or path separators. Key generation is centralized in the `keys` module.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult, StoredEntry};

//! SceneLens Core Library
//!
//! This crate provides the domain models, error taxonomy, configuration and the
//! result normalizer shared across all SceneLens components.

pub mod config;
pub mod error;
pub mod models;
pub mod normalize;

// Re-export commonly used types
pub use config::{BaseConfig, CleanupConfig, Config, LogFormat, LookupConfig, UploadConfig};
pub use error::{classify, AppError, ErrorMetadata, LogLevel, ServiceError, ValidationError};
pub use models::{
    AnimeDisplayModel, ConfidenceTier, ErrorModel, ImageSource, LookupResult, UploadRecord,
};
pub use normalize::normalize;

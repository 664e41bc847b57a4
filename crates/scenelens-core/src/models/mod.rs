//! Domain models
//!
//! Raw recognition-service payloads, the normalized display model, upload records and
//! the user-facing error model.

mod display;
mod error_model;
mod lookup;
mod upload;

pub use display::{AnimeDisplayModel, ConfidenceTier};
pub use error_model::ErrorModel;
pub use lookup::{AnilistField, AnilistInfo, AnilistTitle, CoverImage, LookupResult};
pub use upload::{ImageSource, UploadRecord};

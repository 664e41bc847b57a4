use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A file accepted by the upload receiver and written to transient storage.
///
/// Once written, the file belongs to the cleanup sweeper; nothing else deletes it.
#[derive(Debug, Clone, Serialize)]
pub struct UploadRecord {
    /// Location on disk, unique per upload
    pub stored_path: PathBuf,
    /// Name under which the file is exposed (e.g. `/uploads/{stored_name}`)
    pub public_path: String,
    pub original_name: String,
    pub created_at: DateTime<Utc>,
}

/// The image payload forwarded to the recognition service. Exactly one of bytes or URL.
#[derive(Clone)]
pub enum ImageSource {
    Bytes {
        data: Vec<u8>,
        content_type: String,
    },
    Url(String),
}

impl ImageSource {
    pub fn kind(&self) -> &'static str {
        match self {
            ImageSource::Bytes { .. } => "bytes",
            ImageSource::Url(_) => "url",
        }
    }
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Bytes { data, content_type } => f
                .debug_struct("Bytes")
                .field("len", &data.len())
                .field("content_type", content_type)
                .finish(),
            ImageSource::Url(url) => f.debug_tuple("Url").field(url).finish(),
        }
    }
}

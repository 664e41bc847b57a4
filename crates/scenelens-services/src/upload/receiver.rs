//! Upload receiver: validates incoming images and writes file uploads to transient storage.

use scenelens_core::{AppError, ImageSource, UploadConfig, UploadRecord, ValidationError};
use scenelens_storage::Storage;
use std::sync::Arc;

/// A file part pulled out of a multipart request
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// A stored upload together with the payload to forward to the recognition service
#[derive(Debug)]
pub struct ReceivedUpload {
    pub record: UploadRecord,
    pub source: ImageSource,
}

#[derive(Clone)]
pub struct UploadReceiver {
    storage: Arc<dyn Storage>,
    max_file_size: usize,
}

impl UploadReceiver {
    pub fn new(storage: Arc<dyn Storage>, config: &UploadConfig) -> Self {
        Self {
            storage,
            max_file_size: config.max_file_size_bytes,
        }
    }

    /// Validate and store an uploaded image.
    ///
    /// # Errors
    /// - `MissingInput` - no file was chosen (empty part without a file name)
    /// - `InvalidFileType` - declared media type is not `image/*`
    /// - `FileTooLarge` - file exceeds the configured limit
    #[tracing::instrument(
        skip(self, file),
        fields(file_name = %file.file_name, size_bytes = file.data.len())
    )]
    pub async fn receive_file(&self, file: IncomingFile) -> Result<ReceivedUpload, AppError> {
        if file.file_name.trim().is_empty() && file.data.is_empty() {
            return Err(ValidationError::MissingInput("No file uploaded".to_string()).into());
        }

        let content_type = file
            .content_type
            .as_deref()
            .map(normalize_mime_type)
            .unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(ValidationError::InvalidFileType { content_type }.into());
        }

        if file.data.len() > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                max: self.max_file_size,
            }
            .into());
        }

        let record = self.storage.store(&file.file_name, &file.data).await?;

        Ok(ReceivedUpload {
            record,
            source: ImageSource::Bytes {
                data: file.data,
                content_type,
            },
        })
    }

    /// Validate a submitted image URL. Nothing is written to disk.
    pub fn receive_url(&self, image_url: &str) -> Result<ImageSource, AppError> {
        let url = image_url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingInput("No image URL provided".to_string()).into());
        }
        Ok(ImageSource::Url(url.to_string()))
    }
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_lowercase()
}

//! Multipart helpers for the upload handler

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use scenelens_core::{AppError, ValidationError};
use scenelens_services::IncomingFile;

/// Map a failure while reading the multipart stream. Hitting the body limit means the file
/// was too large; anything else means no usable file arrived.
pub fn multipart_error(err: MultipartError, max_file_size: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::FileTooLarge { max: max_file_size }.into()
    } else {
        ValidationError::MissingInput(format!("Failed to read multipart: {}", err.body_text()))
            .into()
    }
}

/// Extract the file part named `field_name` from a multipart form.
/// Other fields are drained and ignored. Only the first matching part is used.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    field_name: &str,
    max_file_size: usize,
) -> Result<IncomingFile, AppError> {
    let mut file: Option<IncomingFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_file_size))?
    {
        if file.is_some() || field.name() != Some(field_name) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_file_size))?;

        file = Some(IncomingFile {
            file_name,
            content_type,
            data: data.to_vec(),
        });
    }

    file.ok_or_else(|| ValidationError::MissingInput("No file uploaded".to_string()).into())
}

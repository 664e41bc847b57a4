//! Error types module
//!
//! All failures raised while handling a request are unified under [`AppError`]:
//! caller-fixable [`ValidationError`]s, environment-dependent [`ServiceError`]s from the
//! recognition service, and an unclassified catch-all. Components only ever return these;
//! [`classify`] is the one place that turns them into a user-facing [`ErrorModel`].

use std::io;

use crate::models::ErrorModel;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for upstream issues outside our control
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_FILE_TYPE")
    fn error_code(&self) -> &'static str;

    /// Short user-facing label
    fn client_message(&self) -> &'static str;

    /// Remediation guidance shown alongside the label
    fn details(&self) -> &'static str;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Caller-fixable input problems
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid file type: {content_type}")]
    InvalidFileType { content_type: String },

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("File too large (max: {max} bytes)")]
    FileTooLarge { max: usize },
}

/// Failures talking to the external recognition service. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("No matching scene found")]
    NoMatch,

    #[error("Recognition service unreachable: {0}")]
    Unreachable(String),

    #[error("Recognition service error (status {status:?}): {message}")]
    UpstreamError {
        status: Option<u16>,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static presentation for each variant: (http_status, error_code, label, details, log_level).
///
/// Entries are listed in classification order; the first arm that matches wins.
fn app_error_static_metadata(
    err: &AppError,
) -> (u16, &'static str, &'static str, &'static str, LogLevel) {
    match err {
        AppError::Validation(ValidationError::InvalidFileType { .. }) => (
            400,
            "INVALID_FILE_TYPE",
            "Invalid File Type",
            "Only image files can be searched. Upload a JPEG, PNG, GIF or WebP screenshot and try again.",
            LogLevel::Debug,
        ),
        AppError::Validation(ValidationError::FileTooLarge { .. }) => (
            400,
            "FILE_TOO_LARGE",
            "File Too Large",
            "The image exceeds the upload size limit. Crop or compress the screenshot and try again.",
            LogLevel::Debug,
        ),
        AppError::Validation(ValidationError::MissingInput(_)) => (
            400,
            "MISSING_INPUT",
            "Missing Input",
            "No image was provided. Choose an image file or paste an image URL before searching.",
            LogLevel::Debug,
        ),
        AppError::Service(ServiceError::UpstreamError { .. }) => (
            400,
            "SCENE_ANALYSIS_FAILED",
            "Scene Analysis Failed",
            "The recognition service could not analyse this image. Make sure the URL points directly to an image, or try a different screenshot.",
            LogLevel::Warn,
        ),
        AppError::Service(ServiceError::Unreachable(_)) => (
            503,
            "SERVICE_UNAVAILABLE",
            "Service Unavailable",
            "The recognition service could not be reached. Check your connection and try again in a few moments.",
            LogLevel::Warn,
        ),
        AppError::Service(ServiceError::NoMatch) => (
            404,
            "NO_MATCH",
            "No Match Found",
            "No matching scene found for this image. Try an uncropped screenshot taken directly from the episode.",
            LogLevel::Debug,
        ),
        AppError::NotFound(_) => (
            404,
            "NOT_FOUND",
            "Page Not Found",
            "The page you are looking for does not exist. Head back to the home page to start a new search.",
            LogLevel::Debug,
        ),
        AppError::Internal(_) | AppError::InternalWithSource { .. } => (
            400,
            "SYSTEM_INTERRUPT",
            "System Interrupt",
            "Something went wrong while processing your request. Please try again.",
            LogLevel::Error,
        ),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Service(ServiceError::UpstreamError {
                status: Some(status),
                ..
            }) if (400..=599).contains(status) => *status,
            _ => app_error_static_metadata(self).0,
        }
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn client_message(&self) -> &'static str {
        app_error_static_metadata(self).2
    }

    fn details(&self) -> &'static str {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }
}

impl AppError {
    /// Variant name for structured logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::Service(_) => "Service",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "Unclassified",
        }
    }
}

/// Map any failure to the user-facing error model. Exhaustive: unknown failures land in
/// "System Interrupt".
pub fn classify(err: &AppError) -> ErrorModel {
    ErrorModel::new(
        err.client_message(),
        err.details(),
        err.http_status_code(),
    )
}

impl From<&AppError> for ErrorModel {
    fn from(err: &AppError) -> Self {
        classify(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_file_type() {
        let err = AppError::from(ValidationError::InvalidFileType {
            content_type: "text/plain".to_string(),
        });
        let model = classify(&err);
        assert_eq!(model.message, "Invalid File Type");
        assert_eq!(model.status_code, 400);
        assert!(!model.details.is_empty());
        assert_eq!(err.error_code(), "INVALID_FILE_TYPE");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_classify_file_too_large() {
        let err = AppError::from(ValidationError::FileTooLarge { max: 1_000 });
        let model = classify(&err);
        assert_eq!(model.message, "File Too Large");
        assert_eq!(model.status_code, 400);
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_classify_missing_input() {
        let err = AppError::from(ValidationError::MissingInput("imageUrl".to_string()));
        let model = classify(&err);
        assert_eq!(model.message, "Missing Input");
        assert_eq!(model.status_code, 400);
    }

    #[test]
    fn test_classify_upstream_uses_upstream_status() {
        let err = AppError::from(ServiceError::UpstreamError {
            status: Some(402),
            message: "Search quota depleted".to_string(),
        });
        let model = classify(&err);
        assert_eq!(model.message, "Scene Analysis Failed");
        assert_eq!(model.status_code, 402);
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_classify_upstream_without_status_defaults_to_400() {
        let err = AppError::from(ServiceError::UpstreamError {
            status: None,
            message: "invalid JSON".to_string(),
        });
        assert_eq!(classify(&err).status_code, 400);

        let odd_status = AppError::from(ServiceError::UpstreamError {
            status: Some(302),
            message: "redirect".to_string(),
        });
        assert_eq!(classify(&odd_status).status_code, 400);
    }

    #[test]
    fn test_classify_unreachable() {
        let err = AppError::from(ServiceError::Unreachable("connection refused".to_string()));
        let model = classify(&err);
        assert_eq!(model.message, "Service Unavailable");
        assert_eq!(model.status_code, 503);
    }

    #[test]
    fn test_classify_no_match() {
        let model = classify(&AppError::from(ServiceError::NoMatch));
        assert_eq!(model.message, "No Match Found");
        assert_eq!(model.status_code, 404);
        assert!(model.details.contains("No matching scene found"));
    }

    #[test]
    fn test_classify_route_not_found() {
        let model = classify(&AppError::NotFound("/missing".to_string()));
        assert_eq!(model.message, "Page Not Found");
        assert_eq!(model.status_code, 404);
    }

    #[test]
    fn test_classify_unclassified_falls_through_to_system_interrupt() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io_err);
        let model = classify(&err);
        assert_eq!(model.message, "System Interrupt");
        assert_eq!(model.status_code, 400);
        assert_eq!(err.log_level(), LogLevel::Error);

        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(classify(&err).message, "System Interrupt");
        assert_eq!(err.error_type(), "Unclassified");
    }
}

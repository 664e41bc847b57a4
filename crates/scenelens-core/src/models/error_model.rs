use serde::Serialize;

/// User-facing error representation produced by the error classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorModel {
    /// Short label, e.g. "Invalid File Type"
    pub message: String,
    /// Remediation guidance shown under the label
    pub details: String,
    pub status_code: u16,
}

impl ErrorModel {
    pub fn new(message: impl Into<String>, details: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
            status_code,
        }
    }
}

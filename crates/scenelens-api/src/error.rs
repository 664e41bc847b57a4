//! HTTP error response conversion
//!
//! Every failure raised while serving a request ends up here. The classifier picks the label,
//! remediation text and status; this module logs the failure and renders the error view.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>` and let `?`
//! convert `AppError` (or anything that implements `Into<AppError>`).

use axum::{
    extract::rejection::FormRejection,
    extract::{multipart::MultipartRejection, FromRequest, Request},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use scenelens_core::{
    classify, AppError, ErrorMetadata, ErrorModel, LogLevel, ServiceError, ValidationError,
};
use serde::de::DeserializeOwned;

use crate::views;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from scenelens-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<ValidationError> for HttpAppError {
    fn from(err: ValidationError) -> Self {
        HttpAppError(AppError::Validation(err))
    }
}

impl From<ServiceError> for HttpAppError {
    fn from(err: ServiceError) -> Self {
        HttpAppError(AppError::Service(err))
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

/// A request that is not multipart at all carries no file
impl From<MultipartRejection> for HttpAppError {
    fn from(rejection: MultipartRejection) -> Self {
        HttpAppError(AppError::Validation(ValidationError::MissingInput(format!(
            "Invalid multipart request: {}",
            rejection.body_text()
        ))))
    }
}

impl From<FormRejection> for HttpAppError {
    fn from(rejection: FormRejection) -> Self {
        HttpAppError(AppError::Validation(ValidationError::MissingInput(format!(
            "Invalid form body: {}",
            rejection.body_text()
        ))))
    }
}

/// Urlencoded form extractor whose rejections render through the error view.
/// Use this instead of `Form<T>` so a malformed body is reported as missing input.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(inner) = Form::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedForm(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, error_code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, error_code, "Error occurred");
        }
    }
}

/// Classified failure attached to every error response. The error-detail middleware uses it
/// to re-render the page with the raw error text outside production.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub model: ErrorModel,
    pub detail: String,
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        let model = classify(app_error);

        let status = StatusCode::from_u16(model.status_code).unwrap_or(StatusCode::BAD_REQUEST);

        log_error(app_error);

        let mut response = (status, Html(views::error::error_page(&model, None))).into_response();
        response.extensions_mut().insert(ErrorContext {
            model,
            detail: app_error.to_string(),
        });
        response
    }
}

use axum::http::Uri;
use scenelens_core::AppError;

use crate::error::HttpAppError;

/// Any route that matched nothing else renders the 404 error view
pub async fn not_found(uri: Uri) -> HttpAppError {
    HttpAppError(AppError::NotFound(uri.path().to_string()))
}

use axum::body::Body;
use axum::http::{header::CONTENT_LENGTH, HeaderValue};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use scenelens_core::Config;

use crate::error::ErrorContext;
use crate::views;

/// Adds baseline security headers to every response
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    // X-Content-Type-Options: Prevent MIME type sniffing of served uploads
    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("X-Frame-Options", HeaderValue::from_static("DENY"));
    headers.insert(
        "Referrer-Policy",
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    response
}

/// Outside production, re-render error pages with the raw error text as a debugging aid
pub async fn error_detail_middleware(
    State(config): State<Config>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if config.is_production() {
        return response;
    }
    let Some(context) = response.extensions().get::<ErrorContext>().cloned() else {
        return response;
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let page = views::error::error_page(&context.model, Some(&context.detail));
    Response::from_parts(parts, Body::from(page))
}

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
};
use scenelens_core::normalize;

use crate::constants::UPLOAD_FIELD;
use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use crate::views;

/// Search by uploaded screenshot
///
/// Validates and stores the `animeImage` part, forwards the bytes to the recognition
/// service and renders the best match. The stored copy backs the "your image" preview
/// until the sweeper removes it.
///
/// # Errors
/// - `InvalidFileType` - the part is not declared as `image/*`
/// - `FileTooLarge` - the part exceeds the configured limit
/// - `MissingInput` - no file part was sent
/// - any `ServiceError` from the recognition service
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_search"))]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, HttpAppError> {
    let multipart = multipart?;
    let file = extract_multipart_file(
        multipart,
        UPLOAD_FIELD,
        state.config.max_file_size_bytes(),
    )
    .await?;

    let upload = state.receiver.receive_file(file).await?;
    let result = state.lookup.search(upload.source).await?;
    let anime = normalize(&result, &upload.record.public_path);

    tracing::info!(
        upload = %upload.record.public_path,
        title = %anime.display_title(),
        similarity = %anime.similarity_percent,
        "Upload search completed"
    );

    Ok(Html(views::result::result_page(&anime)))
}

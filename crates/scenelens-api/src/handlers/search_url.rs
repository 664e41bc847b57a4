use std::sync::Arc;

use axum::{extract::State, response::Html};
use scenelens_core::normalize;
use serde::Deserialize;

use crate::error::{HttpAppError, ValidatedForm};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct SearchUrlForm {
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

/// Search by image URL. The URL is handed to the recognition service as-is; nothing is
/// fetched or stored locally.
#[tracing::instrument(skip(state, form), fields(operation = "url_search"))]
pub async fn search_by_url(
    State(state): State<Arc<AppState>>,
    ValidatedForm(form): ValidatedForm<SearchUrlForm>,
) -> Result<Html<String>, HttpAppError> {
    let source = state.receiver.receive_url(&form.image_url)?;
    let image_url = form.image_url.trim();

    let result = state.lookup.search(source).await?;
    let anime = normalize(&result, image_url);

    tracing::info!(
        title = %anime.display_title(),
        similarity = %anime.similarity_percent,
        "URL search completed"
    );

    Ok(Html(views::result::result_page(&anime)))
}

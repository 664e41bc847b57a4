use axum::response::Html;

use crate::views;

/// Landing page with the upload and URL search forms
pub async fn index() -> Html<String> {
    Html(views::index::index_page())
}

pub async fn about() -> Html<String> {
    Html(views::about::about_page())
}

use scenelens_core::ErrorModel;

use super::{escape_html, layout, search_forms};

/// Render a classified failure. `debug_detail` is the raw error text, shown only outside
/// production.
pub fn error_page(error: &ErrorModel, debug_detail: Option<&str>) -> String {
    let debug_block = debug_detail
        .map(|detail| {
            format!(
                "            <pre class=\"error-debug\">{}</pre>\n",
                escape_html(detail)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"        <section class="error-card">
            <span class="error-status">{status}</span>
            <h1>{message}</h1>
            <p class="error-details">{details}</p>
{debug_block}            <a class="button" href="/">Back to search</a>
        </section>
{forms}"#,
        status = error.status_code,
        message = escape_html(&error.message),
        details = escape_html(&error.details),
        debug_block = debug_block,
        forms = search_forms(),
    );
    layout(&error.message, "error", &body)
}

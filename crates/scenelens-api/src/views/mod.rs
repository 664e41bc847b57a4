//! Server-rendered HTML views
//!
//! Pages are plain `format!` templates. Every interpolated value goes through
//! [`escape_html`]; nothing user- or upstream-supplied is written raw.

pub mod about;
pub mod error;
pub mod index;
pub mod result;

use crate::constants::{APP_NAME, STATIC_ROUTE};

/// Escape text for use in HTML element content and double- or single-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell (head, nav, footer).
/// `body_content` must already be escaped.
pub(crate) fn layout(title: &str, page: &str, body_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | {app}</title>
    <link rel="stylesheet" href="{static_route}/styles.css">
</head>
<body data-page="{page}">
    <nav class="navbar">
        <a class="brand" href="/">{app}</a>
        <div class="nav-links">
            <a href="/">Search</a>
            <a href="/about">About</a>
        </div>
    </nav>
    <main class="container">
{body_content}
    </main>
    <footer class="footer">
        <p>Scene data from <a href="https://trace.moe" rel="noopener">trace.moe</a> and <a href="https://anilist.co" rel="noopener">AniList</a>.</p>
    </footer>
</body>
</html>
"#,
        title = escape_html(title),
        app = APP_NAME,
        static_route = STATIC_ROUTE,
        page = escape_html(page),
        body_content = body_content,
    )
}

/// The two search forms, shared by the landing page and the result/error pages
pub(crate) fn search_forms() -> String {
    use crate::constants::{UPLOAD_FIELD, URL_FIELD};

    format!(
        r#"        <section class="search-box">
            <form class="search-form" action="/upload" method="post" enctype="multipart/form-data">
                <label for="{upload_field}">Upload a screenshot</label>
                <input type="file" id="{upload_field}" name="{upload_field}" accept="image/*" required>
                <button type="submit">Search by image</button>
            </form>
            <div class="divider"><span>or</span></div>
            <form class="search-form" action="/search-url" method="post">
                <label for="{url_field}">Paste an image URL</label>
                <input type="url" id="{url_field}" name="{url_field}" placeholder="https://example.com/screenshot.jpg" required>
                <button type="submit">Search by URL</button>
            </form>
        </section>
"#,
        upload_field = UPLOAD_FIELD,
        url_field = URL_FIELD,
    )
}

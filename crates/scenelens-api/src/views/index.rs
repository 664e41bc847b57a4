use super::{layout, search_forms};

pub fn index_page() -> String {
    let body = format!(
        r#"        <section class="hero">
            <h1>Which anime is this scene from?</h1>
            <p>Upload a screenshot or paste an image link and we'll find the series, the episode and the moment it appears.</p>
        </section>
{forms}"#,
        forms = search_forms(),
    );
    layout("Find the anime", "index", &body)
}

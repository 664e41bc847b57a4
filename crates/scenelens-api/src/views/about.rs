use super::layout;

pub fn about_page() -> String {
    let body = r#"        <section class="about">
            <h1>About</h1>
            <p>SceneLens identifies the anime a screenshot was taken from. Your image is sent to the
            <a href="https://soruly.github.io/trace.moe-api/" rel="noopener">trace.moe</a> search API, which
            compares it against frames from thousands of series and returns the closest scene along with
            its <a href="https://anilist.co" rel="noopener">AniList</a> entry.</p>
            <h2>Tips for better matches</h2>
            <ul>
                <li>Use the full, uncropped frame. Borders, subtitles burned in by fans and heavy edits lower the similarity.</li>
                <li>Similarity of 85% or more is usually a correct match. Below 60% the result is likely wrong.</li>
                <li>Uploaded images are deleted from the server about a minute after your search.</li>
            </ul>
        </section>
"#;
    layout("About", "about", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_page_renders() {
        let html = about_page();
        assert!(html.contains("<h1>About</h1>"));
        assert!(html.contains(r#"data-page="about""#));
    }
}

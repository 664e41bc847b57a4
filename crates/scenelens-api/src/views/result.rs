use scenelens_core::AnimeDisplayModel;

use super::{escape_html, layout, search_forms};

pub fn result_page(anime: &AnimeDisplayModel) -> String {
    let title = anime.display_title();

    let banner = anime
        .banner_image
        .as_deref()
        .map(|src| {
            format!(
                "        <div class=\"banner\"><img src=\"{}\" alt=\"\"></div>\n",
                escape_html(src)
            )
        })
        .unwrap_or_default();

    let cover = anime
        .cover_image
        .as_deref()
        .map(|src| {
            format!(
                "                <img class=\"cover\" src=\"{}\" alt=\"{} cover\">\n",
                escape_html(src),
                escape_html(title)
            )
        })
        .unwrap_or_default();

    // Secondary titles, skipping whichever one is already the heading
    let alt_titles: String = [
        ("English", anime.title_english.as_deref()),
        ("Native", anime.title_native.as_deref()),
        ("Romaji", anime.title_romaji.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.filter(|v| *v != title).map(|v| (label, v)))
    .map(|(label, value)| {
        format!(
            "                    <li><span class=\"label\">{}</span> {}</li>\n",
            label,
            escape_html(value)
        )
    })
    .collect();

    let timestamp = anime
        .scene_timestamp
        .as_deref()
        .map(|ts| {
            format!(
                "                    <li><span class=\"label\">Scene at</span> {}</li>\n",
                escape_html(ts)
            )
        })
        .unwrap_or_default();

    let anilist_link = anime
        .anilist_url
        .as_deref()
        .map(|url| {
            format!(
                "                <a class=\"button\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View on AniList</a>\n",
                escape_html(url)
            )
        })
        .unwrap_or_default();

    let preview_video = anime
        .preview_video
        .as_deref()
        .map(|src| {
            format!(
                "                <video class=\"preview\" src=\"{}\" controls muted loop playsinline></video>\n",
                escape_html(src)
            )
        })
        .unwrap_or_default();

    let preview_image = anime
        .preview_image
        .as_deref()
        .map(|src| {
            format!(
                "                <img class=\"preview\" src=\"{}\" alt=\"Matched frame\">\n",
                escape_html(src)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"{banner}        <section class="result-card">
            <div class="result-header">
{cover}                <div class="result-info">
                    <h1>{title}</h1>
                    <ul class="titles">
{alt_titles}                    </ul>
                    <ul class="facts">
                    <li><span class="label">Episode</span> {episode}</li>
{timestamp}                    <li><span class="label">Similarity</span> {similarity}%</li>
                    </ul>
                    <span class="confidence confidence-{tier_class}">{tier_label}</span>
                </div>
            </div>
            <div class="media">
                <figure>
                    <figcaption>Your image</figcaption>
                    <img class="uploaded" src="{uploaded}" alt="Your image">
                </figure>
                <figure>
                    <figcaption>Matched scene</figcaption>
{preview_video}{preview_image}                </figure>
            </div>
            <div class="actions">
{anilist_link}                <a class="button secondary" href="/">New search</a>
            </div>
        </section>
{forms}"#,
        banner = banner,
        cover = cover,
        title = escape_html(title),
        alt_titles = alt_titles,
        episode = escape_html(&anime.episode),
        timestamp = timestamp,
        similarity = escape_html(&anime.similarity_percent),
        tier_class = anime.confidence_tier.as_str(),
        tier_label = anime.confidence_tier.label(),
        uploaded = escape_html(&anime.uploaded_image_ref),
        preview_video = preview_video,
        preview_image = preview_image,
        anilist_link = anilist_link,
        forms = search_forms(),
    );

    layout(title, "result", &body)
}

//! Result normalizer: raw recognition-service match -> display model.

use crate::models::{AnimeDisplayModel, ConfidenceTier, LookupResult};

const EPISODE_NOT_AVAILABLE: &str = "N/A";

/// Map a raw match into the display model. Never fails on missing fields.
///
/// The similarity is formatted first and the tier is derived from the formatted value, so
/// the tier always agrees with the percentage the user sees.
pub fn normalize(result: &LookupResult, uploaded_image_ref: &str) -> AnimeDisplayModel {
    let info = result.anilist_info();
    let title = info.and_then(|i| i.title.as_ref());
    let cover = info.and_then(|i| i.cover_image.as_ref());

    let similarity_percent = format_similarity(result.similarity.unwrap_or(0.0));
    let confidence_tier = similarity_percent
        .parse::<f64>()
        .map(ConfidenceTier::from_percent)
        .unwrap_or(ConfidenceTier::Low);

    let model = AnimeDisplayModel {
        title_romaji: title.and_then(|t| non_empty(t.romaji.as_deref())),
        title_english: title.and_then(|t| non_empty(t.english.as_deref())),
        title_native: title.and_then(|t| non_empty(t.native.as_deref())),
        episode: episode_label(result.episode.as_ref()),
        similarity_percent,
        anilist_url: info.and_then(|i| non_empty(i.site_url.as_deref())),
        cover_image: cover.and_then(|c| {
            non_empty(c.large.as_deref()).or_else(|| non_empty(c.medium.as_deref()))
        }),
        banner_image: info.and_then(|i| non_empty(i.banner_image.as_deref())),
        preview_image: non_empty(result.image.as_deref()),
        preview_video: non_empty(result.video.as_deref()),
        uploaded_image_ref: uploaded_image_ref.to_string(),
        confidence_tier,
        scene_timestamp: result.from.and_then(format_timestamp),
    };

    tracing::debug!(
        title = %model.display_title(),
        episode = %model.episode,
        similarity = %model.similarity_percent,
        confidence = %model.confidence_tier,
        "Normalized scene match"
    );

    model
}

/// similarity (0.0-1.0) -> percentage string with exactly two decimals
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}", similarity * 100.0)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn episode_label(episode: Option<&serde_json::Value>) -> String {
    use serde_json::Value;

    let label = match episode {
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::String(s)) => non_empty(Some(s)),
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::Number(n) => Some(n.to_string()),
                    Value::String(s) => non_empty(Some(s)),
                    _ => None,
                })
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    };

    label.unwrap_or_else(|| EPISODE_NOT_AVAILABLE.to_string())
}

fn format_timestamp(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let total = seconds.floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    Some(if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    })
}

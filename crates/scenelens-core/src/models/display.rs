use serde::Serialize;
use std::fmt;

/// Qualitative bucket for a similarity percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub const HIGH_THRESHOLD: f64 = 85.0;
    pub const MEDIUM_THRESHOLD: f64 = 60.0;

    /// Bucket a similarity percentage (0-100).
    pub fn from_percent(percent: f64) -> Self {
        if percent >= Self::HIGH_THRESHOLD {
            ConfidenceTier::High
        } else if percent >= Self::MEDIUM_THRESHOLD {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High Confidence",
            ConfidenceTier::Medium => "Medium Confidence",
            ConfidenceTier::Low => "Low Confidence",
        }
    }

    /// Lowercase token, used as a CSS class by the result view
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized, display-ready view of a single scene match.
///
/// Built once per successful lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeDisplayModel {
    pub title_romaji: Option<String>,
    pub title_english: Option<String>,
    pub title_native: Option<String>,
    /// Literal "N/A" when the service did not report an episode
    pub episode: String,
    /// similarity x 100, always two decimals (e.g. "94.40")
    pub similarity_percent: String,
    pub anilist_url: Option<String>,
    pub cover_image: Option<String>,
    pub banner_image: Option<String>,
    pub preview_image: Option<String>,
    pub preview_video: Option<String>,
    /// Public path of the uploaded file, or the URL the user submitted
    pub uploaded_image_ref: String,
    pub confidence_tier: ConfidenceTier,
    /// Position of the scene inside the episode, e.g. "11:03"
    pub scene_timestamp: Option<String>,
}

impl AnimeDisplayModel {
    pub fn display_title(&self) -> &str {
        self.title_romaji
            .as_deref()
            .or(self.title_english.as_deref())
            .or(self.title_native.as_deref())
            .unwrap_or("Unknown title")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ConfidenceTier::from_percent(100.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_percent(85.0), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_percent(84.99), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percent(60.0), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_percent(59.99), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_percent(0.0), ConfidenceTier::Low);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(ConfidenceTier::High.to_string(), "High Confidence");
        assert_eq!(ConfidenceTier::Medium.label(), "Medium Confidence");
        assert_eq!(ConfidenceTier::Low.as_str(), "low");
    }
}

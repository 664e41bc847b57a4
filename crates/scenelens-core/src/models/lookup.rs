//! Raw match payload returned by the recognition service.
//!
//! Every field may be absent or null; nothing here is validated beyond its JSON type.

use serde::{Deserialize, Serialize};

/// First element of the service's `result` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub anilist: Option<AnilistField>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Number, string, list of numbers, or null depending on the source file
    #[serde(default)]
    pub episode: Option<serde_json::Value>,
    /// Scene start, in seconds from the start of the episode
    #[serde(default)]
    pub from: Option<f64>,
    #[serde(default)]
    pub to: Option<f64>,
    /// 0.0 - 1.0
    #[serde(default)]
    pub similarity: Option<f64>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// `anilist` is an object when `anilistInfo` was requested and resolvable, otherwise a bare id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnilistField {
    Info(Box<AnilistInfo>),
    Id(i64),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnilistInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<AnilistTitle>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub banner_image: Option<String>,
    #[serde(default)]
    pub is_adult: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnilistTitle {
    #[serde(default)]
    pub romaji: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverImage {
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

impl LookupResult {
    /// AniList details, if the service returned them
    pub fn anilist_info(&self) -> Option<&AnilistInfo> {
        match self.anilist.as_ref()? {
            AnilistField::Info(info) => Some(info),
            AnilistField::Id(_) => None,
        }
    }
}

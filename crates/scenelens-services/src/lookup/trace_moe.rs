//! trace.moe search API client

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use scenelens_core::{ImageSource, LookupConfig, LookupResult, ServiceError};
use serde::Deserialize;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use super::traits::SceneLookup;

const MAX_ERROR_BODY_CHARS: usize = 200;

/// Wire format of `GET|POST /search`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub frame_count: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<LookupResult>>,
}

/// trace.moe client. Requests AniList metadata alongside every match.
pub struct TraceMoeClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl Debug for TraceMoeClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TraceMoeClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TraceMoeClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client for trace.moe")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search?anilistInfo", self.base_url)
    }

    /// Pull a readable message out of a failed response body
    fn error_message(body: &str) -> String {
        if let Ok(parsed) = serde_json::from_str::<SearchResponse>(body) {
            if let Some(error) = parsed.error.filter(|e| !e.trim().is_empty()) {
                return error;
            }
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            "Unknown error".to_string()
        } else {
            trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
        }
    }
}

#[async_trait]
impl SceneLookup for TraceMoeClient {
    #[tracing::instrument(skip(self, source), fields(source = source.kind()))]
    async fn search(&self, source: ImageSource) -> Result<LookupResult, ServiceError> {
        let request = match source {
            ImageSource::Bytes { data, content_type } => self
                .http_client
                .post(self.search_url())
                .header(CONTENT_TYPE, content_type)
                .body(data),
            ImageSource::Url(url) => self.http_client.get(format!(
                "{}&url={}",
                self.search_url(),
                urlencoding::encode(&url)
            )),
        };

        let start = std::time::Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to reach trace.moe");
            ServiceError::Unreachable(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::error_message(&body);
            tracing::warn!(status = status.as_u16(), error = %message, "trace.moe request failed");
            return Err(ServiceError::UpstreamError {
                status: Some(status.as_u16()),
                message,
            });
        }

        let search: SearchResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse trace.moe response");
            ServiceError::UpstreamError {
                status: None,
                message: format!("Invalid response from trace.moe: {}", e),
            }
        })?;

        if let Some(error) = search.error.filter(|e| !e.trim().is_empty()) {
            tracing::warn!(error = %error, "trace.moe reported an error");
            return Err(ServiceError::UpstreamError {
                status: None,
                message: error,
            });
        }

        let best = search
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or(ServiceError::NoMatch)?;

        tracing::info!(
            frame_count = ?search.frame_count,
            similarity = ?best.similarity,
            filename = ?best.filename,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "trace.moe search completed"
        );

        Ok(best)
    }
}

//! Test helpers: build AppState and router for integration tests.
//!
//! The recognition service is replaced by [`MockLookup`], so these tests never leave the
//! process. Run with `cargo test -p scenelens-api`.

#![allow(dead_code)] // Each test binary uses a different subset

use async_trait::async_trait;
use axum_test::TestServer;
use scenelens_api::setup::routes;
use scenelens_api::state::AppState;
use scenelens_core::{Config, ImageSource, LookupResult, ServiceError};
use scenelens_services::{LocalStorage, SceneLookup, Storage, UploadReceiver};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

type Responder = dyn Fn(&ImageSource) -> Result<LookupResult, ServiceError> + Send + Sync;

/// Scripted stand-in for the recognition service. Records every source it is asked about.
pub struct MockLookup {
    respond: Box<Responder>,
    pub calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new(
        respond: impl Fn(&ImageSource) -> Result<LookupResult, ServiceError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the given match
    pub fn matching(result: serde_json::Value) -> Self {
        Self::new(move |_| {
            Ok(serde_json::from_value(result.clone()).expect("valid lookup result fixture"))
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SceneLookup for MockLookup {
    async fn search(&self, source: ImageSource) -> Result<LookupResult, ServiceError> {
        let description = match &source {
            ImageSource::Bytes { data, content_type } => {
                format!("bytes:{}:{}", content_type, data.len())
            }
            ImageSource::Url(url) => format!("url:{}", url),
        };
        self.calls.lock().unwrap().push(description);
        (self.respond)(&source)
    }
}

/// A realistic match with full AniList metadata
pub fn frieren_match() -> serde_json::Value {
    serde_json::json!({
        "anilist": {
            "id": 154587,
            "title": {
                "romaji": "Sousou no Frieren",
                "english": "Frieren: Beyond Journey's End",
                "native": "葬送のフリーレン"
            },
            "siteUrl": "https://anilist.co/anime/154587",
            "coverImage": { "large": "https://img/cover-l.jpg", "medium": "https://img/cover-m.jpg" },
            "bannerImage": "https://img/banner.jpg"
        },
        "filename": "[Sub] Frieren - 07.mkv",
        "episode": 7,
        "from": 754.5,
        "to": 756.2,
        "similarity": 0.9215,
        "video": "https://media.trace.moe/video/154587/clip.mp4",
        "image": "https://media.trace.moe/image/154587/frame.jpg"
    })
}

/// Test application: server plus the resources it owns.
pub struct TestApp {
    pub server: TestServer,
    pub lookup: Arc<MockLookup>,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of the files currently in the transient upload directory
    pub fn stored_uploads(&self) -> Vec<String> {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| {
                entries
                    .filter_map(Result::ok)
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Test config rooted in `temp_dir`; `overrides` are applied on top of the defaults
pub fn create_test_config(temp_dir: &TempDir, overrides: &[(&str, &str)]) -> Config {
    let mut vars = HashMap::new();
    vars.insert(
        "UPLOAD_DIR",
        temp_dir.path().join("uploads").display().to_string(),
    );
    vars.insert(
        "PUBLIC_DIR",
        temp_dir.path().join("public").display().to_string(),
    );
    vars.insert("MAX_FILE_SIZE_MB", "1".to_string());
    vars.insert("CLEANUP_ENABLED", "false".to_string());
    vars.insert("ENVIRONMENT", "test".to_string());
    for (key, value) in overrides {
        vars.insert(*key, value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

/// Setup test app with isolated local storage and the given lookup behavior.
pub async fn setup_test_app(lookup: MockLookup) -> TestApp {
    setup_test_app_with_config(lookup, &[]).await
}

pub async fn setup_test_app_with_config(lookup: MockLookup, overrides: &[(&str, &str)]) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(&temp_dir, overrides);

    std::fs::create_dir_all(config.public_dir()).expect("Failed to create public dir");
    std::fs::write(config.public_dir().join("styles.css"), "body { margin: 0; }")
        .expect("Failed to write stylesheet");

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(config.upload_dir(), "/uploads")
            .await
            .expect("Failed to create local storage"),
    );

    let lookup = Arc::new(lookup);
    let state = Arc::new(AppState {
        config: config.clone(),
        receiver: UploadReceiver::new(storage, config.upload()),
        lookup: lookup.clone(),
        cleanup: None,
    });

    let app = routes::setup_routes(&config, state);
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        lookup,
        upload_dir: config.upload_dir().to_path_buf(),
        _temp_dir: temp_dir,
    }
}

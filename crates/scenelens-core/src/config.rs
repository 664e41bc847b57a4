//! Configuration module
//!
//! This module provides the immutable configuration structure handed to every
//! component at startup: server settings, transient upload storage, the cleanup
//! sweeper and the external recognition service.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

// Common constants
const SERVER_PORT: u16 = 3000;
const UPLOAD_DIR: &str = "uploads";
const PUBLIC_DIR: &str = "public";
const MAX_FILE_SIZE_MB: usize = 10;
const BYTES_PER_MB: usize = 1024 * 1024;
const CLEANUP_INTERVAL_SECS: u64 = 30;
const UPLOAD_RETENTION_SECS: u64 = 60;
const TRACE_MOE_BASE_URL: &str = "https://api.trace.moe";
const LOOKUP_TIMEOUT_SECS: u64 = 60;

/// Console log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Unknown log format: {}", other)),
        }
    }
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub public_dir: PathBuf,
    pub log_format: LogFormat,
}

/// Transient upload storage settings
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub upload_dir: PathBuf,
    pub max_file_size_bytes: usize,
}

/// Cleanup sweeper settings
#[derive(Clone, Debug)]
pub struct CleanupConfig {
    pub enabled: bool,
    pub interval: Duration,
    pub retention: Duration,
}

/// External recognition service settings
#[derive(Clone, Debug)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
struct AppConfig {
    base: BaseConfig,
    upload: UploadConfig,
    cleanup: CleanupConfig,
    lookup: LookupConfig,
    /// Raw `MAX_FILE_SIZE_MB`, kept so `validate` can report values that overflow in bytes
    max_file_size_mb: usize,
}

/// Application configuration.
///
/// Built once at startup and passed by value (it is an `Arc` underneath) to each
/// component; nothing reads settings from ambient globals after that.
#[derive(Clone, Debug)]
pub struct Config(Arc<AppConfig>);

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let log_format = lookup("LOG_FORMAT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Compact);

        let max_file_size_mb = parse_or(&lookup, "MAX_FILE_SIZE_MB", MAX_FILE_SIZE_MB);

        let base = BaseConfig {
            server_port,
            environment,
            public_dir: lookup("PUBLIC_DIR")
                .unwrap_or_else(|| PUBLIC_DIR.to_string())
                .into(),
            log_format,
        };

        let upload = UploadConfig {
            upload_dir: lookup("UPLOAD_DIR")
                .unwrap_or_else(|| UPLOAD_DIR.to_string())
                .into(),
            max_file_size_bytes: max_file_size_mb.saturating_mul(BYTES_PER_MB),
        };

        let cleanup = CleanupConfig {
            enabled: parse_or(&lookup, "CLEANUP_ENABLED", true),
            interval: Duration::from_secs(parse_or(
                &lookup,
                "CLEANUP_INTERVAL_SECS",
                CLEANUP_INTERVAL_SECS,
            )),
            retention: Duration::from_secs(parse_or(
                &lookup,
                "UPLOAD_RETENTION_SECS",
                UPLOAD_RETENTION_SECS,
            )),
        };

        let lookup_config = LookupConfig {
            base_url: lookup("TRACE_MOE_BASE_URL")
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| TRACE_MOE_BASE_URL.to_string()),
            timeout: Duration::from_secs(parse_or(
                &lookup,
                "LOOKUP_TIMEOUT_SECS",
                LOOKUP_TIMEOUT_SECS,
            )),
        };

        Ok(Config(Arc::new(AppConfig {
            base,
            upload,
            cleanup,
            lookup: lookup_config,
            max_file_size_mb,
        })))
    }

    /// Reject settings that would make a component misbehave at runtime.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.0.max_file_size_mb == 0 {
            anyhow::bail!("MAX_FILE_SIZE_MB must be greater than 0");
        }
        if self.0.max_file_size_mb.checked_mul(BYTES_PER_MB).is_none() {
            anyhow::bail!(
                "MAX_FILE_SIZE_MB is too large: {}",
                self.0.max_file_size_mb
            );
        }
        if self.0.cleanup.interval.is_zero() {
            anyhow::bail!("CLEANUP_INTERVAL_SECS must be greater than 0");
        }
        if self.0.cleanup.retention.is_zero() {
            anyhow::bail!("UPLOAD_RETENTION_SECS must be greater than 0");
        }
        if self.0.lookup.timeout.is_zero() {
            anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than 0");
        }
        let base_url = &self.0.lookup.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "TRACE_MOE_BASE_URL must be an http(s) URL, got '{}'",
                base_url
            );
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.0.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.0.base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.0.base.environment
    }

    pub fn public_dir(&self) -> &Path {
        &self.0.base.public_dir
    }

    pub fn log_format(&self) -> LogFormat {
        self.0.base.log_format
    }

    pub fn upload(&self) -> &UploadConfig {
        &self.0.upload
    }

    pub fn upload_dir(&self) -> &Path {
        &self.0.upload.upload_dir
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.0.upload.max_file_size_bytes
    }

    pub fn cleanup(&self) -> &CleanupConfig {
        &self.0.cleanup
    }

    pub fn lookup(&self) -> &LookupConfig {
        &self.0.lookup
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

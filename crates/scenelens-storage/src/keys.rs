//! Storage key generation.

use std::sync::atomic::{AtomicI64, Ordering};

const MAX_NAME_LENGTH: usize = 128;
const FALLBACK_NAME: &str = "upload";

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp that strictly increases across calls within this process.
pub(crate) fn next_stamp() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let previous = LAST_STAMP
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(now);
    now.max(previous + 1)
}

/// `{stamp}-{sanitized name}`
pub(crate) fn generate_key(original_name: &str) -> String {
    format!("{}-{}", next_stamp(), sanitize_filename(original_name))
}

/// Reduce a client-supplied file name to a safe, flat file name.
///
/// Directory components are dropped and anything outside `[A-Za-z0-9._-]` becomes `_`.
pub(crate) fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let sanitized: String = base
        .chars()
        .take(MAX_NAME_LENGTH)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let sanitized = sanitized.replace("..", "_");
    if sanitized.trim_matches(|c| c == '.' || c == '_').is_empty() {
        return FALLBACK_NAME.to_string();
    }
    sanitized
}

/// Keys are flat names; reject anything that could address outside the storage root.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains("..") && !key.contains('/') && !key.contains('\\')
}

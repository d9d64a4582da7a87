//! Video identifier extraction from pasted links or bare IDs.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BARE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid bare id regex"));
static QUERY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]v=([^&]+)").expect("valid query param regex"));
static SHORT_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([^?&]+)").expect("valid short link regex"));
static EMBED_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"embed/([^?&]+)").expect("valid embed regex"));

/// Canonical video identifier as used by the search and comment APIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps an identifier taken verbatim from an API response.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Public watch page for this video.
    #[must_use]
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Public channel page for a channel ID.
#[must_use]
pub fn channel_url(channel_id: &str) -> String {
    format!("https://www.youtube.com/channel/{channel_id}")
}

/// Extracts a video identifier from a user-supplied string.
///
/// Rules are tried in order and the first match wins:
/// 1. the whole string is an 11-character ID (`[A-Za-z0-9_-]`),
/// 2. a `v=` query parameter, up to the next `&`,
/// 3. the segment after `youtu.be/`, up to `?` or `&`,
/// 4. the segment after `embed/`, same truncation.
///
/// Returns `None` when nothing matches.
#[must_use]
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    if BARE_ID.is_match(input) {
        return Some(VideoId(input.to_owned()));
    }

    [&*QUERY_PARAM, &*SHORT_LINK, &*EMBED_PATH]
        .into_iter()
        .find_map(|re| re.captures(input))
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_owned()))
}

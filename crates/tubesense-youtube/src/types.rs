//! `YouTube` Data API v3 response types.
//!
//! Only the fields tubesense reads are modelled. Nested fields are optional so
//! that a single malformed item does not fail the whole page.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

/// Body of `GET search?part=snippet&type=video`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: Option<SearchItemId>,
    #[serde(default)]
    pub snippet: Option<SearchSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    /// Absent for channel or playlist hits.
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub channel_id: String,
}

// ---------------------------------------------------------------------------
// commentThreads
// ---------------------------------------------------------------------------

/// Body of `GET commentThreads?part=snippet`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadsResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    /// Absent (or empty) on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommentThread {
    #[serde(default)]
    pub snippet: Option<CommentThreadSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    #[serde(default)]
    pub top_level_comment: Option<TopLevelComment>,
}

#[derive(Debug, Deserialize)]
pub struct TopLevelComment {
    #[serde(default)]
    pub snippet: Option<CommentSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub text_display: Option<String>,
}

impl CommentThread {
    /// Display text of the top-level comment, if the item is well formed.
    #[must_use]
    pub fn text_display(&self) -> Option<&str> {
        self.snippet
            .as_ref()?
            .top_level_comment
            .as_ref()?
            .snippet
            .as_ref()?
            .text_display
            .as_deref()
    }
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

/// Error envelope: `{"error": {"code": 403, "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

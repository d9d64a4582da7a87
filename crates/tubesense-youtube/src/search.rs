//! Keyword video search.

use serde::{Deserialize, Serialize};
use tubesense_core::VideoId;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;
use crate::types::SearchResponse;

/// One video returned by a keyword search, in API rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub video_id: VideoId,
    pub title: String,
    pub channel_name: String,
    pub channel_id: String,
}

impl YoutubeClient {
    /// Searches videos matching `query`, returning at most `max_results` hits.
    ///
    /// Items without a `videoId` are skipped. An empty list means "no
    /// matches" and is not an error.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Api`] on a non-2xx status (bad key, quota).
    /// - [`YoutubeError::Deserialize`] if the body is not a search response.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<SearchHit>, YoutubeError> {
        let max = max_results.to_string();
        let url = self.build_url(
            "search",
            &[("type", "video"), ("q", query), ("maxResults", &max)],
        );
        let response: SearchResponse = self.get_json(url, &format!("search(q={query})")).await?;

        let hits: Vec<SearchHit> = response
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id?.video_id.filter(|id| !id.is_empty())?;
                let snippet = item.snippet.unwrap_or_default();
                Some(SearchHit {
                    video_id: VideoId::new(video_id),
                    title: snippet.title,
                    channel_name: snippet.channel_title,
                    channel_id: snippet.channel_id,
                })
            })
            .collect();

        tracing::debug!(query, hits = hits.len(), "video search complete");
        Ok(hits)
    }
}

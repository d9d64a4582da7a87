//! Paginated top-level comment retrieval.

use tubesense_core::VideoId;

use crate::client::YoutubeClient;
use crate::error::YoutubeError;
use crate::types::CommentThreadsResponse;

/// Largest `maxResults` the `commentThreads` endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Hard stop on page requests per video, in case the API keeps handing out
/// tokens for pages that add no comments.
const MAX_PAGES: usize = 500;

/// One page of comment text plus the cursor for the next page.
#[derive(Debug, Clone, Default)]
pub struct CommentPage {
    /// Display text of every well-formed item on the page.
    pub comments: Vec<String>,
    /// Number of items the API returned, including malformed ones.
    pub item_count: usize,
    /// `None` on the last page.
    pub next_page_token: Option<String>,
}

impl YoutubeClient {
    /// Fetches a single page of top-level comments.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Api`] on a non-2xx status (e.g. comments disabled).
    /// - [`YoutubeError::Deserialize`] if the body is not a comment listing.
    pub async fn fetch_comment_page(
        &self,
        video_id: &VideoId,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<CommentPage, YoutubeError> {
        let size = page_size.min(MAX_PAGE_SIZE).to_string();
        let mut params = vec![("videoId", video_id.as_str()), ("maxResults", size.as_str())];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.build_url("commentThreads", &params);
        let response: CommentThreadsResponse = self
            .get_json(url, &format!("commentThreads(videoId={video_id})"))
            .await?;

        let item_count = response.items.len();
        let comments = response
            .items
            .iter()
            .filter_map(|thread| thread.text_display().map(str::to_owned))
            .collect();

        Ok(CommentPage {
            comments,
            item_count,
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    /// Fetches up to `max_comments` top-level comments for a video.
    ///
    /// Each page requests `min(100, remaining)` items and follows
    /// `nextPageToken`. Pagination stops when the cap is reached, a page is
    /// empty, or no token is returned.
    ///
    /// Best effort: any failure ends pagination and the comments collected so
    /// far are returned. Never returns more than `max_comments` entries.
    pub async fn fetch_comments(&self, video_id: &VideoId, max_comments: usize) -> Vec<String> {
        let mut comments: Vec<String> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        while comments.len() < max_comments {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    video_id = %video_id,
                    fetched = comments.len(),
                    max_pages = MAX_PAGES,
                    "comment pagination limit reached"
                );
                break;
            }

            let remaining = max_comments - comments.len();
            let page = match self
                .fetch_comment_page(video_id, remaining.min(MAX_PAGE_SIZE), page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        video_id = %video_id,
                        fetched = comments.len(),
                        error = %e,
                        "comment fetch aborted; keeping partial results"
                    );
                    break;
                }
            };

            if page.item_count == 0 {
                break;
            }

            comments.extend(page.comments);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        // The API may return more items than requested.
        comments.truncate(max_comments);
        tracing::debug!(video_id = %video_id, fetched = comments.len(), pages = page_count, "comments fetched");
        comments
    }
}

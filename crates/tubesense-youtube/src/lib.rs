//! Client for the `YouTube` Data API v3 endpoints tubesense depends on:
//! keyword video search and top-level comment threads.

pub mod client;
pub mod comments;
pub mod error;
pub mod search;
pub mod types;

pub use client::YoutubeClient;
pub use comments::{CommentPage, MAX_PAGE_SIZE};
pub use error::YoutubeError;
pub use search::SearchHit;

//! Comment sentiment analysis for tubesense.
//!
//! Fetches a video's top-level comments, labels each one through the external
//! classifier service, and reduces the labels to a single score. In topic mode
//! every search hit is scored this way and the hits are ranked by score.

pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use classifier::ClassifierClient;
pub use error::SentimentError;
pub use pipeline::{rank_candidates, Analyzer};
pub use scorer::{net_score, normalized_score, ScoreTally};
pub use types::{
    topic_notes_url, AnalysisReport, AnalyzerConfig, ScoreResult, SentimentLabel, TopicReport,
    VideoCandidate, VideoReport,
};

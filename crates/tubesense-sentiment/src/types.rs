use serde::Serialize;
use tubesense_core::{AppConfig, ScoreFormula, VideoId};
use tubesense_youtube::SearchHit;

/// Tri-state classification of one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Signed value: `+1`, `0` or `-1`.
    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            SentimentLabel::Positive => 1,
            SentimentLabel::Neutral => 0,
            SentimentLabel::Negative => -1,
        }
    }

    /// Interprets the classifier's numeric `sentiment` field.
    ///
    /// Only exactly `1` and `-1` carry a polarity; every other value,
    /// including a missing one, is neutral.
    #[must_use]
    pub fn from_wire(value: Option<f64>) -> Self {
        match value {
            Some(v) if (v - 1.0).abs() < f64::EPSILON => SentimentLabel::Positive,
            Some(v) if (v + 1.0).abs() < f64::EPSILON => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

/// Aggregate sentiment for one video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    /// Number of classified comments; always `positive + neutral + negative`.
    pub total: usize,
    pub score: i64,
    pub formula: ScoreFormula,
}

/// A search hit, with its score once the ranking pipeline has run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCandidate {
    pub video_id: VideoId,
    pub title: String,
    pub channel_name: String,
    pub channel_id: String,
    pub score: Option<ScoreResult>,
}

impl VideoCandidate {
    /// Score used for ranking; unscored candidates rank as `0`.
    #[must_use]
    pub fn rank_score(&self) -> i64 {
        self.score.map_or(0, |s| s.score)
    }
}

impl From<SearchHit> for VideoCandidate {
    fn from(hit: SearchHit) -> Self {
        Self {
            video_id: hit.video_id,
            title: hit.title,
            channel_name: hit.channel_name,
            channel_id: hit.channel_id,
            score: None,
        }
    }
}

/// Outcome of analyzing a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VideoReport {
    Scored {
        video_id: VideoId,
        result: ScoreResult,
    },
    /// The video has no retrievable comments (none posted, disabled, or the
    /// listing failed on the first page).
    NoComments { video_id: VideoId },
}

/// Outcome of a topic search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopicReport {
    /// Candidates sorted by score, best first.
    Ranked {
        query: String,
        videos: Vec<VideoCandidate>,
    },
    NoResults { query: String },
}

impl TopicReport {
    /// The highlighted top candidate, if any.
    #[must_use]
    pub fn best(&self) -> Option<&VideoCandidate> {
        match self {
            TopicReport::Ranked { videos, .. } => videos.first(),
            TopicReport::NoResults { .. } => None,
        }
    }

    /// Web search link for `"<query> notes"`, shown after a ranked list.
    #[must_use]
    pub fn notes_url(&self) -> Option<String> {
        match self {
            TopicReport::Ranked { query, .. } => topic_notes_url(query),
            TopicReport::NoResults { .. } => None,
        }
    }
}

const NOTES_SEARCH_URL: &str = "https://www.google.com/search";

/// Google search link for `"<topic> notes"` with the query form-encoded.
#[must_use]
pub fn topic_notes_url(topic: &str) -> Option<String> {
    let mut url = reqwest::Url::parse(NOTES_SEARCH_URL).ok()?;
    url.query_pairs_mut()
        .append_pair("q", &format!("{} notes", topic.trim()));
    Some(url.into())
}

/// Result of [`crate::Analyzer::analyze`], which picks the mode itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnalysisReport {
    Video(VideoReport),
    Topic(TopicReport),
}

/// Limits and scoring choices for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub video_max_comments: usize,
    pub topic_max_comments: usize,
    pub topic_max_results: u32,
    /// Upper bound on in-flight classifier requests per video.
    pub classify_concurrency: usize,
    pub score_formula: ScoreFormula,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            video_max_comments: 1000,
            topic_max_comments: 200,
            topic_max_results: 5,
            classify_concurrency: 4,
            score_formula: ScoreFormula::Normalized,
        }
    }
}

impl AnalyzerConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            video_max_comments: config.video_max_comments,
            topic_max_comments: config.topic_max_comments,
            topic_max_results: config.topic_max_results,
            classify_concurrency: config.classify_concurrency,
            score_formula: config.score_formula,
        }
    }
}

//! Sentiment pipeline orchestration.

use tubesense_core::{extract_video_id, resolve_mode, AppConfig, InputMode, VideoId};
use tubesense_youtube::YoutubeClient;

use crate::classifier::ClassifierClient;
use crate::error::SentimentError;
use crate::types::{
    AnalysisReport, AnalyzerConfig, ScoreResult, TopicReport, VideoCandidate, VideoReport,
};

/// Runs video and topic analyses against the configured services.
pub struct Analyzer {
    youtube: YoutubeClient,
    classifier: ClassifierClient,
    config: AnalyzerConfig,
}

impl Analyzer {
    #[must_use]
    pub fn new(youtube: YoutubeClient, classifier: ClassifierClient, config: AnalyzerConfig) -> Self {
        Self {
            youtube,
            classifier,
            config,
        }
    }

    /// Builds both HTTP clients and the pipeline limits from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if either HTTP client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, SentimentError> {
        let youtube = YoutubeClient::from_app_config(config)?;
        let classifier = ClassifierClient::new(
            &config.classifier_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(Self::new(
            youtube,
            classifier,
            AnalyzerConfig::from_app_config(config),
        ))
    }

    #[must_use]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Picks video or topic mode for `input` and runs it.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::analyze_video`] and [`Analyzer::rank_topic`].
    pub async fn analyze(
        &self,
        input: &str,
        requested: InputMode,
    ) -> Result<AnalysisReport, SentimentError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        match resolve_mode(input, requested) {
            InputMode::Video => self.analyze_video(input).await.map(AnalysisReport::Video),
            InputMode::Topic | InputMode::Auto => {
                self.rank_topic(input).await.map(AnalysisReport::Topic)
            }
        }
    }

    /// Scores the comments of the video referenced by `input` (a link or a bare ID).
    ///
    /// A video without retrievable comments yields [`VideoReport::NoComments`].
    ///
    /// # Errors
    ///
    /// - [`SentimentError::EmptyInput`] for blank input.
    /// - [`SentimentError::InvalidReference`] if no video ID can be extracted.
    pub async fn analyze_video(&self, input: &str) -> Result<VideoReport, SentimentError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SentimentError::EmptyInput);
        }
        let video_id = extract_video_id(input)
            .ok_or_else(|| SentimentError::InvalidReference(input.to_owned()))?;

        let result = self
            .score_video(&video_id, self.config.video_max_comments)
            .await;

        if result.total == 0 {
            tracing::info!(video_id = %video_id, "no comments found");
            return Ok(VideoReport::NoComments { video_id });
        }

        tracing::info!(
            video_id = %video_id,
            total = result.total,
            score = result.score,
            "video analysis complete"
        );
        Ok(VideoReport::Scored { video_id, result })
    }

    /// Searches `query` and ranks the hits by comment sentiment, using the
    /// configured result count.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::rank_topic_with_limit`].
    pub async fn rank_topic(&self, query: &str) -> Result<TopicReport, SentimentError> {
        self.rank_topic_with_limit(query, self.config.topic_max_results)
            .await
    }

    /// Searches `query`, scores up to `max_results` hits one after another,
    /// and returns them sorted best first.
    ///
    /// Hits without comments stay in the list with a zero-count result.
    ///
    /// # Errors
    ///
    /// - [`SentimentError::EmptyInput`] for a blank query.
    /// - [`SentimentError::Youtube`] if the search request itself fails.
    pub async fn rank_topic_with_limit(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<TopicReport, SentimentError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SentimentError::EmptyInput);
        }

        let hits = self.youtube.search_videos(query, max_results).await?;
        if hits.is_empty() {
            tracing::info!(query, "search returned no videos");
            return Ok(TopicReport::NoResults {
                query: query.to_owned(),
            });
        }

        let mut candidates = Vec::with_capacity(hits.len());
        for hit in hits {
            let mut candidate = VideoCandidate::from(hit);
            let result = self
                .score_video(&candidate.video_id, self.config.topic_max_comments)
                .await;
            tracing::debug!(
                video_id = %candidate.video_id,
                total = result.total,
                score = result.score,
                "candidate scored"
            );
            candidate.score = Some(result);
            candidates.push(candidate);
        }

        let videos = rank_candidates(candidates);
        tracing::info!(query, videos = videos.len(), "topic ranking complete");
        Ok(TopicReport::Ranked {
            query: query.to_owned(),
            videos,
        })
    }

    /// Fetch, classify and score up to `max_comments` comments of one video.
    ///
    /// Never fails: fetch problems shorten the comment list and classifier
    /// problems become neutral labels.
    pub async fn score_video(&self, video_id: &VideoId, max_comments: usize) -> ScoreResult {
        let comments = self.youtube.fetch_comments(video_id, max_comments).await;
        let labels = self
            .classifier
            .classify_all(&comments, self.config.classify_concurrency)
            .await;
        ScoreResult::from_labels(labels, self.config.score_formula)
    }
}

/// Sorts candidates by score, highest first. The sort is stable, so
/// candidates with equal scores keep their search order.
#[must_use]
pub fn rank_candidates(mut candidates: Vec<VideoCandidate>) -> Vec<VideoCandidate> {
    candidates.sort_by(|a, b| b.rank_score().cmp(&a.rank_score()));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubesense_core::ScoreFormula;

    fn candidate(id: &str, score: i64) -> VideoCandidate {
        VideoCandidate {
            video_id: VideoId::new(id),
            title: format!("title {id}"),
            channel_name: "chan".to_string(),
            channel_id: "UC".to_string(),
            score: Some(ScoreResult {
                positive: 0,
                neutral: 0,
                negative: 0,
                total: 0,
                score,
                formula: ScoreFormula::Normalized,
            }),
        }
    }

    fn ids(candidates: &[VideoCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.video_id.as_str()).collect()
    }

    #[test]
    fn rank_candidates_sorts_descending() {
        let ranked = rank_candidates(vec![candidate("a", 3), candidate("b", 9), candidate("c", 6)]);
        assert_eq!(ids(&ranked), ["b", "c", "a"]);
    }

    #[test]
    fn rank_candidates_keeps_input_order_for_ties() {
        let ranked = rank_candidates(vec![
            candidate("a", 5),
            candidate("b", 7),
            candidate("c", 5),
            candidate("d", 7),
            candidate("e", 5),
        ]);
        assert_eq!(ids(&ranked), ["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn rank_candidates_handles_negative_net_scores() {
        let ranked = rank_candidates(vec![candidate("a", -4), candidate("b", 0), candidate("c", -1)]);
        assert_eq!(ids(&ranked), ["b", "c", "a"]);
    }

    #[test]
    fn rank_candidates_empty_is_empty() {
        assert!(rank_candidates(Vec::new()).is_empty());
    }
}

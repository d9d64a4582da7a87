use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use tubesense_core::channel_url;
use tubesense_sentiment::{ScoreResult, TopicReport, VideoCandidate, VideoReport};

use crate::middleware::RequestId;

use super::{map_analysis_error, normalize_max_results, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeVideoRequest {
    #[serde(default)]
    video: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeTopicRequest {
    #[serde(default)]
    query: String,
    max_results: Option<u32>,
}

#[derive(Debug, Serialize)]
struct VideoAnalysisData {
    status: &'static str,
    video_id: String,
    watch_url: String,
    result: Option<ScoreResult>,
}

#[derive(Debug, Serialize, Clone)]
struct RankedVideo {
    rank: usize,
    highlighted: bool,
    video_id: String,
    title: String,
    channel_name: String,
    watch_url: String,
    channel_url: String,
    result: Option<ScoreResult>,
}

#[derive(Debug, Serialize)]
struct TopicAnalysisData {
    status: &'static str,
    query: String,
    best: Option<RankedVideo>,
    videos: Vec<RankedVideo>,
    notes_url: Option<String>,
}

impl From<VideoReport> for VideoAnalysisData {
    fn from(report: VideoReport) -> Self {
        match report {
            VideoReport::Scored { video_id, result } => Self {
                status: "scored",
                watch_url: video_id.watch_url(),
                video_id: video_id.to_string(),
                result: Some(result),
            },
            VideoReport::NoComments { video_id } => Self {
                status: "no_comments",
                watch_url: video_id.watch_url(),
                video_id: video_id.to_string(),
                result: None,
            },
        }
    }
}

fn ranked_video(index: usize, candidate: VideoCandidate) -> RankedVideo {
    RankedVideo {
        rank: index + 1,
        highlighted: index == 0,
        watch_url: candidate.video_id.watch_url(),
        channel_url: channel_url(&candidate.channel_id),
        video_id: candidate.video_id.to_string(),
        title: candidate.title,
        channel_name: candidate.channel_name,
        result: candidate.score,
    }
}

impl From<TopicReport> for TopicAnalysisData {
    fn from(report: TopicReport) -> Self {
        let notes_url = report.notes_url();
        match report {
            TopicReport::Ranked { query, videos } => {
                let videos: Vec<RankedVideo> = videos
                    .into_iter()
                    .enumerate()
                    .map(|(i, c)| ranked_video(i, c))
                    .collect();
                Self {
                    status: "ranked",
                    query,
                    best: videos.first().cloned(),
                    videos,
                    notes_url,
                }
            }
            TopicReport::NoResults { query } => Self {
                status: "no_results",
                query,
                best: None,
                videos: Vec::new(),
                notes_url,
            },
        }
    }
}

pub(super) async fn analyze_video(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzeVideoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .analyzer
        .analyze_video(&body.video)
        .await
        .map_err(|e| map_analysis_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: VideoAnalysisData::from(report),
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

pub(super) async fn analyze_topic(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<AnalyzeTopicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let max_results = normalize_max_results(
        body.max_results,
        state.analyzer.config().topic_max_results,
    );
    let report = state
        .analyzer
        .rank_topic_with_limit(&body.query, max_results)
        .await
        .map_err(|e| map_analysis_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            data: TopicAnalysisData::from(report),
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubesense_core::{ScoreFormula, VideoId};

    fn candidate(id: &str, score: i64) -> VideoCandidate {
        VideoCandidate {
            video_id: VideoId::new(id),
            title: format!("title {id}"),
            channel_name: "chan".to_string(),
            channel_id: format!("UC{id}"),
            score: Some(ScoreResult {
                positive: 1,
                neutral: 0,
                negative: 0,
                total: 1,
                score,
                formula: ScoreFormula::Normalized,
            }),
        }
    }

    #[test]
    fn topic_data_highlights_first_video() {
        let data = TopicAnalysisData::from(TopicReport::Ranked {
            query: "rust".to_string(),
            videos: vec![candidate("bbbbbbbbbbb", 9), candidate("aaaaaaaaaaa", 4)],
        });

        assert_eq!(data.status, "ranked");
        let best = data.best.expect("best video");
        assert_eq!(best.video_id, "bbbbbbbbbbb");
        assert!(best.highlighted);
        assert_eq!(best.rank, 1);
        assert_eq!(
            best.channel_url,
            "https://www.youtube.com/channel/UCbbbbbbbbbbb"
        );
        assert!(!data.videos[1].highlighted);
        assert_eq!(data.videos[1].rank, 2);
        assert_eq!(
            data.notes_url.as_deref(),
            Some("https://www.google.com/search?q=rust+notes")
        );
    }

    #[test]
    fn no_comments_report_has_watch_url_and_no_result() {
        let data = VideoAnalysisData::from(VideoReport::NoComments {
            video_id: VideoId::new("dQw4w9WgXcQ"),
        });
        assert_eq!(data.status, "no_comments");
        assert_eq!(data.watch_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(data.result.is_none());
    }

    #[test]
    fn topic_request_accepts_missing_max_results() {
        let req: AnalyzeTopicRequest =
            serde_json::from_str(r#"{"query":"cats"}"#).expect("parse");
        assert_eq!(req.query, "cats");
        assert!(req.max_results.is_none());
    }
}

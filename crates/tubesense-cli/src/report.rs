//! Plain-text rendering of analysis reports.

use std::fmt::Write as _;

use tubesense_core::{channel_url, ScoreFormula};
use tubesense_sentiment::{AnalysisReport, ScoreResult, TopicReport, VideoReport};

pub(crate) fn render(report: &AnalysisReport) -> String {
    match report {
        AnalysisReport::Video(video) => render_video(video),
        AnalysisReport::Topic(topic) => render_topic(topic),
    }
}

fn fmt_score(result: &ScoreResult) -> String {
    match result.formula {
        ScoreFormula::Normalized => format!("{}/10", result.score),
        ScoreFormula::NetDifference => format!("{:+} (net)", result.score),
    }
}

pub(crate) fn render_video(report: &VideoReport) -> String {
    match report {
        VideoReport::NoComments { video_id } => {
            format!("no comments found for video {video_id}\n")
        }
        VideoReport::Scored { video_id, result } => {
            let mut out = String::new();
            let _ = writeln!(out, "video: {}", video_id.watch_url());
            let _ = writeln!(
                out,
                "comments: {} (positive {}, neutral {}, negative {})",
                result.total, result.positive, result.neutral, result.negative
            );
            let _ = writeln!(out, "score: {}", fmt_score(result));
            out
        }
    }
}

pub(crate) fn render_topic(report: &TopicReport) -> String {
    let (query, videos) = match report {
        TopicReport::NoResults { query } => {
            return format!("no videos found for '{query}'\n");
        }
        TopicReport::Ranked { query, videos } => (query, videos),
    };

    let mut out = String::new();
    let _ = writeln!(out, "topic: {query} ({} videos)", videos.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "  {:<6}{:<12}{:<10}TITLE", "RANK", "SCORE", "COMMENTS");
    for (i, video) in videos.iter().enumerate() {
        let marker = if i == 0 { '*' } else { ' ' };
        let (score, total) = video
            .score
            .as_ref()
            .map_or_else(|| ("-".to_string(), 0), |s| (fmt_score(s), s.total));
        let _ = writeln!(
            out,
            "{marker} {:<6}{:<12}{:<10}{}",
            i + 1,
            score,
            total,
            video.title
        );
    }

    if let Some(best) = report.best() {
        let _ = writeln!(out);
        let _ = writeln!(out, "best video: {} by {}", best.title, best.channel_name);
        let _ = writeln!(out, "  watch:   {}", best.video_id.watch_url());
        let _ = writeln!(out, "  channel: {}", channel_url(&best.channel_id));
    }
    if let Some(notes) = report.notes_url() {
        let _ = writeln!(out);
        let _ = writeln!(out, "topic notes: {notes}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubesense_core::VideoId;
    use tubesense_sentiment::VideoCandidate;

    fn result(positive: usize, neutral: usize, negative: usize, score: i64) -> ScoreResult {
        ScoreResult {
            positive,
            neutral,
            negative,
            total: positive + neutral + negative,
            score,
            formula: ScoreFormula::Normalized,
        }
    }

    fn candidate(id: &str, title: &str, score: ScoreResult) -> VideoCandidate {
        VideoCandidate {
            video_id: VideoId::new(id),
            title: title.to_string(),
            channel_name: format!("{title} channel"),
            channel_id: format!("UC{id}"),
            score: Some(score),
        }
    }

    #[test]
    fn scored_video_shows_counts_and_score() {
        let text = render_video(&VideoReport::Scored {
            video_id: VideoId::new("dQw4w9WgXcQ"),
            result: result(2, 2, 1, 6),
        });
        assert!(text.contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(text.contains("comments: 5 (positive 2, neutral 2, negative 1)"));
        assert!(text.contains("score: 6/10"));
    }

    #[test]
    fn net_scores_are_signed() {
        let mut net = result(1, 0, 3, -2);
        net.formula = ScoreFormula::NetDifference;
        let text = render_video(&VideoReport::Scored {
            video_id: VideoId::new("dQw4w9WgXcQ"),
            result: net,
        });
        assert!(text.contains("score: -2 (net)"), "{text}");
    }

    #[test]
    fn no_comments_is_a_message() {
        let text = render_video(&VideoReport::NoComments {
            video_id: VideoId::new("dQw4w9WgXcQ"),
        });
        assert_eq!(text, "no comments found for video dQw4w9WgXcQ\n");
    }

    #[test]
    fn ranked_topic_marks_the_best_video() {
        let report = TopicReport::Ranked {
            query: "rust".to_string(),
            videos: vec![
                candidate("bbbbbbbbbbb", "Loved", result(2, 1, 0, 8)),
                candidate("aaaaaaaaaaa", "Mixed", result(1, 0, 1, 5)),
            ],
        };
        let text = render_topic(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "topic: rust (2 videos)");
        assert!(lines[3].starts_with("* 1"), "{}", lines[3]);
        assert!(lines[3].ends_with("Loved"));
        assert!(lines[4].starts_with("  2"), "{}", lines[4]);
        assert!(text.contains("best video: Loved by Loved channel"));
        assert!(text.contains("channel: https://www.youtube.com/channel/UCbbbbbbbbbbb"));
        assert_eq!(
            text.lines().last(),
            Some("topic notes: https://www.google.com/search?q=rust+notes")
        );
    }

    #[test]
    fn empty_search_is_a_message() {
        let text = render_topic(&TopicReport::NoResults {
            query: "zzz".to_string(),
        });
        assert_eq!(text, "no videos found for 'zzz'\n");
    }
}

use std::net::SocketAddr;

use crate::ScoreFormula;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings, resolved once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub bind_addr: SocketAddr,
    pub youtube_api_key: String,
    pub youtube_base_url: String,
    pub classifier_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub video_max_comments: usize,
    pub topic_max_comments: usize,
    pub topic_max_results: u32,
    pub classify_concurrency: usize,
    pub score_formula: ScoreFormula,
    /// Analysis requests the server accepts per minute.
    pub analysis_rate_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("bind_addr", &self.bind_addr)
            .field("youtube_api_key", &"[redacted]")
            .field("youtube_base_url", &self.youtube_base_url)
            .field("classifier_url", &self.classifier_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("video_max_comments", &self.video_max_comments)
            .field("topic_max_comments", &self.topic_max_comments)
            .field("topic_max_results", &self.topic_max_results)
            .field("classify_concurrency", &self.classify_concurrency)
            .field("score_formula", &self.score_formula)
            .field("analysis_rate_limit", &self.analysis_rate_limit)
            .finish()
    }
}

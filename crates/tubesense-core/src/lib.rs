//! Shared configuration and domain primitives for tubesense.

mod app_config;
mod config;
mod mode;
mod video_id;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use mode::{resolve_mode, InputMode};
pub use video_id::{channel_url, extract_video_id, VideoId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// How per-comment labels are reduced to a single video score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    /// `round((pos - neg + total) / (2 * total) * 10)`, always in `0..=10`.
    #[default]
    Normalized,
    /// `pos - neg`, signed and unbounded.
    NetDifference,
}

impl std::fmt::Display for ScoreFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreFormula::Normalized => write!(f, "normalized"),
            ScoreFormula::NetDifference => write!(f, "net"),
        }
    }
}

impl std::str::FromStr for ScoreFormula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalized" | "normalised" => Ok(ScoreFormula::Normalized),
            "net" | "net_difference" => Ok(ScoreFormula::NetDifference),
            other => Err(format!(
                "unknown score formula '{other}' (expected 'normalized' or 'net')"
            )),
        }
    }
}

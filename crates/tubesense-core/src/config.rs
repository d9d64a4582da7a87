use crate::app_config::{AppConfig, Environment};
use crate::{ConfigError, ScoreFormula};

const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let youtube_api_key = require("YOUTUBE_API_KEY")?;

    let env = parse_environment(&or_default("TUBESENSE_ENV", "development"))?;
    let log_level = or_default("TUBESENSE_LOG_LEVEL", "info");
    let bind_addr = or_default("TUBESENSE_BIND_ADDR", "127.0.0.1:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("TUBESENSE_BIND_ADDR", e.to_string()))?;

    let youtube_base_url = or_default("TUBESENSE_YOUTUBE_BASE_URL", DEFAULT_YOUTUBE_BASE_URL);
    let classifier_url = or_default("TUBESENSE_CLASSIFIER_URL", "http://127.0.0.1:5000");
    if !classifier_url.starts_with("http://") && !classifier_url.starts_with("https://") {
        return Err(invalid(
            "TUBESENSE_CLASSIFIER_URL",
            "must start with http:// or https://".to_string(),
        ));
    }

    let request_timeout_secs = parse_u64("TUBESENSE_REQUEST_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("TUBESENSE_USER_AGENT", "tubesense/0.1 (comment-sentiment)");

    let video_max_comments = parse_usize("TUBESENSE_VIDEO_MAX_COMMENTS", "1000")?;
    let topic_max_comments = parse_usize("TUBESENSE_TOPIC_MAX_COMMENTS", "200")?;
    let topic_max_results = parse_u32("TUBESENSE_TOPIC_MAX_RESULTS", "5")?;
    if topic_max_results == 0 || topic_max_results > 50 {
        return Err(invalid(
            "TUBESENSE_TOPIC_MAX_RESULTS",
            format!("{topic_max_results} is outside 1..=50"),
        ));
    }

    let classify_concurrency = parse_usize("TUBESENSE_CLASSIFY_CONCURRENCY", "4")?;
    if classify_concurrency == 0 {
        return Err(invalid(
            "TUBESENSE_CLASSIFY_CONCURRENCY",
            "must be at least 1".to_string(),
        ));
    }

    let score_formula = or_default("TUBESENSE_SCORE_FORMULA", "normalized")
        .parse::<ScoreFormula>()
        .map_err(|reason| invalid("TUBESENSE_SCORE_FORMULA", reason))?;

    let analysis_rate_limit = parse_usize("TUBESENSE_ANALYSIS_RATE_LIMIT", "30")?;
    if analysis_rate_limit == 0 {
        return Err(invalid(
            "TUBESENSE_ANALYSIS_RATE_LIMIT",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        bind_addr,
        youtube_api_key,
        youtube_base_url,
        classifier_url,
        request_timeout_secs,
        user_agent,
        video_max_comments,
        topic_max_comments,
        topic_max_results,
        classify_concurrency,
        score_formula,
        analysis_rate_limit,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TUBESENSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid defaults.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("YOUTUBE_API_KEY", "yt-test-key");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "TUBESENSE_ENV"));
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "YOUTUBE_API_KEY"),
        "expected MissingEnvVar(YOUTUBE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("YOUTUBE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.youtube_api_key, "yt-test-key");
    assert_eq!(cfg.youtube_base_url, "https://www.googleapis.com/youtube/v3/");
    assert_eq!(cfg.classifier_url, "http://127.0.0.1:5000");
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.video_max_comments, 1000);
    assert_eq!(cfg.topic_max_comments, 200);
    assert_eq!(cfg.topic_max_results, 5);
    assert_eq!(cfg.classify_concurrency, 4);
    assert_eq!(cfg.score_formula, ScoreFormula::Normalized);
    assert_eq!(cfg.analysis_rate_limit, 30);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("TUBESENSE_ENV", "production");
    map.insert("TUBESENSE_CLASSIFIER_URL", "https://classifier.internal");
    map.insert("TUBESENSE_VIDEO_MAX_COMMENTS", "250");
    map.insert("TUBESENSE_CLASSIFY_CONCURRENCY", "1");
    map.insert("TUBESENSE_SCORE_FORMULA", "net");
    map.insert("TUBESENSE_ANALYSIS_RATE_LIMIT", "120");

    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");

    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.classifier_url, "https://classifier.internal");
    assert_eq!(cfg.video_max_comments, 250);
    assert_eq!(cfg.classify_concurrency, 1);
    assert_eq!(cfg.score_formula, ScoreFormula::NetDifference);
    assert_eq!(cfg.analysis_rate_limit, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("TUBESENSE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_BIND_ADDR"),
        "expected InvalidEnvVar(TUBESENSE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_concurrency() {
    let mut map = full_env();
    map.insert("TUBESENSE_CLASSIFY_CONCURRENCY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_CLASSIFY_CONCURRENCY")
    );
}

#[test]
fn build_app_config_rejects_zero_rate_limit() {
    let mut map = full_env();
    map.insert("TUBESENSE_ANALYSIS_RATE_LIMIT", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_ANALYSIS_RATE_LIMIT")
    );
}

#[test]
fn build_app_config_rejects_out_of_range_topic_results() {
    let mut map = full_env();
    map.insert("TUBESENSE_TOPIC_MAX_RESULTS", "51");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_TOPIC_MAX_RESULTS")
    );
}

#[test]
fn build_app_config_rejects_unknown_formula() {
    let mut map = full_env();
    map.insert("TUBESENSE_SCORE_FORMULA", "average");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_SCORE_FORMULA")
    );
}

#[test]
fn build_app_config_rejects_classifier_url_without_scheme() {
    let mut map = full_env();
    map.insert("TUBESENSE_CLASSIFIER_URL", "localhost:5000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TUBESENSE_CLASSIFIER_URL")
    );
}

#[test]
fn debug_output_redacts_api_key() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("yt-test-key"), "api key leaked: {debug}");
    assert!(debug.contains("[redacted]"));
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube error: {0}")]
    Youtube(#[from] tubesense_youtube::YoutubeError),

    #[error("no input provided")]
    EmptyInput,

    #[error("not a recognizable video link or ID: {0}")]
    InvalidReference(String),

    #[error("classifier error: {0}")]
    Classifier(String),
}

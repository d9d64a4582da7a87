//! Client for the external comment classifier (`POST /predict`).

use std::time::Duration;

use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::types::SentimentLabel;

/// Classifier HTTP client.
///
/// Every failure degrades to [`SentimentLabel::Neutral`]; a broken classifier
/// never aborts an analysis.
pub struct ClassifierClient {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    comment: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    sentiment: Option<f64>,
}

impl ClassifierClient {
    /// Create a new `ClassifierClient` for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SentimentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url: format!("{}/predict", base_url.trim_end_matches('/')),
        })
    }

    /// Classify one comment, falling back to neutral on any failure.
    pub async fn classify(&self, comment: &str) -> SentimentLabel {
        if comment.trim().is_empty() {
            return SentimentLabel::Neutral;
        }
        match self.try_classify(comment).await {
            Ok(label) => label,
            Err(e) => {
                tracing::debug!(error = %e, "classification failed, defaulting to neutral");
                SentimentLabel::Neutral
            }
        }
    }

    /// Classify every comment with at most `concurrency` requests in flight.
    ///
    /// Labels come back in completion order, not input order. A
    /// `concurrency` of 1 classifies strictly one comment at a time.
    pub async fn classify_all(&self, comments: &[String], concurrency: usize) -> Vec<SentimentLabel> {
        stream::iter(comments.iter().cloned())
            .map(|comment| async move { self.classify(&comment).await })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failure and
    /// [`SentimentError::Classifier`] for a non-2xx status or an unparseable body.
    async fn try_classify(&self, comment: &str) -> Result<SentimentLabel, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&PredictRequest { comment })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SentimentError::Classifier(format!(
                "classifier returned status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let parsed: PredictResponse = serde_json::from_str(&body).map_err(|e| {
            SentimentError::Classifier(format!("classifier response parse error: {e}"))
        })?;

        Ok(SentimentLabel::from_wire(parsed.sentiment))
    }
}

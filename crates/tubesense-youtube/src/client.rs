//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key management, base URL handling and typed
//! response deserialization. Non-2xx responses are surfaced as
//! [`YoutubeError::Api`] using the message from the API's error envelope.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::YoutubeError;
use crate::types::ErrorResponse;

pub(crate) const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the `YouTube` Data API.
///
/// Use [`YoutubeClient::new`] for production or [`YoutubeClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client from the process configuration.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::with_base_url`].
    pub fn from_app_config(config: &tubesense_core::AppConfig) -> Result<Self, YoutubeError> {
        Self::with_base_url(
            &config.youtube_api_key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.youtube_base_url,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`YoutubeError::InvalidBaseUrl`] if `base_url` does
    /// not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash; `build_url` replaces the empty last
        // segment with the endpoint.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| YoutubeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Builds an endpoint URL with `part=snippet`, the given parameters and
    /// the API key, all percent-encoded.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(endpoint);
        }
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("part", "snippet");
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Sends a GET request and deserializes a 2xx body into `T`.
    ///
    /// `context` names the call in error messages. The URL itself is never
    /// logged or embedded in errors because it carries the API key.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Http`] on network failure.
    /// - [`YoutubeError::Api`] on a non-2xx status.
    /// - [`YoutubeError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, YoutubeError> {
        let response = self.client.get(url).send().await.map_err(strip_url)?;
        let status = response.status();
        let body = response.text().await.map_err(strip_url)?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Drops the request URL (which carries the API key) from a `reqwest` error.
fn strip_url(err: reqwest::Error) -> YoutubeError {
    YoutubeError::Http(err.without_url())
}

/// Maps a non-2xx response to [`YoutubeError::Api`], preferring the message
/// from the API's error envelope.
fn api_error(status: u16, body: &str) -> YoutubeError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .unwrap_or_else(|| "request failed".to_owned());
    YoutubeError::Api { status, message }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

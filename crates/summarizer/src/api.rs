//! REST API client for the summarization endpoint.
//!
//! Wraps a single `POST` to the configured model URL using [`reqwest`].

use serde::Serialize;
use serde_json::Value;

use crate::response::extract_summary;

/// HTTP client for the inference endpoint.
#[derive(Clone)]
pub struct SummarizerApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Errors from the summarization API layer.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a body that is not JSON.
    #[error("Invalid response from summarization service: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
}

impl SummarizerApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Full model URL, e.g.
    ///   `https://api-inference.huggingface.co/models/facebook/bart-large-cnn`.
    /// * `api_key` - Bearer token sent with every request.
    pub fn new(api_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    /// Summarise `text`, returning the normalised summary string.
    ///
    /// The body is read as JSON whatever the HTTP status, because the
    /// service reports its own failures (model loading, bad token) as
    /// `{"error": ...}` payloads; those are returned as the summary. A
    /// single attempt is made.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&SummarizeRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Summarization service returned an error status");
        }

        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        Ok(extract_summary(&body))
    }
}

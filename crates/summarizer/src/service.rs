//! Decides whether a summary needs the remote service and builds the reply.

use glocation_core::analysis::{
    is_blank, join_descriptions, sample, MISSING_CREDENTIAL, NOTHING_TO_SUMMARIZE,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::{SummarizerApi, SummarizerError};
use crate::config::SummarizerConfig;

/// Reply of the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Summary text, or a fixed notice when no summary could be requested.
    pub resumen: String,
    /// Start of the input text, only present when the API key is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_resumen: Option<String>,
}

impl Summary {
    fn text(resumen: impl Into<String>) -> Self {
        Self {
            resumen: resumen.into(),
            sample_resumen: None,
        }
    }
}

/// Summarises project descriptions, calling out only when it has to.
#[derive(Clone)]
pub struct SummaryService {
    api: Option<SummarizerApi>,
}

impl SummaryService {
    /// Build the service from configuration. Without an API key no client
    /// is created and every request is answered locally.
    pub fn new(config: &SummarizerConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Build the service around an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &SummarizerConfig) -> Self {
        let api = config
            .api_key
            .clone()
            .map(|key| SummarizerApi::with_client(client, config.api_url.clone(), key));
        Self { api }
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api.is_some()
    }

    /// Summarise the given descriptions, in order.
    ///
    /// - Blank combined text: fixed "nothing to summarise" reply.
    /// - No API key: fixed "credential missing" reply plus a text sample.
    /// - Otherwise: one call to the remote service.
    pub async fn summarize<I>(&self, descriptions: I) -> Result<Summary, SummarizerError>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let text = join_descriptions(descriptions);
        if is_blank(&text) {
            tracing::debug!("No descriptions to summarise");
            return Ok(Summary::text(NOTHING_TO_SUMMARIZE));
        }

        let Some(api) = &self.api else {
            tracing::debug!("Summarization API key not configured, skipping outbound call");
            return Ok(Summary {
                resumen: MISSING_CREDENTIAL.to_string(),
                sample_resumen: Some(sample(&text)),
            });
        };

        tracing::info!(chars = text.chars().count(), "Requesting summary from inference service");
        let resumen = api.summarize(&text).await?;
        Ok(Summary::text(resumen))
    }
}

/// Default inference endpoint (BART large, CNN summarization fine-tune).
pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Summarization service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Full URL of the model endpoint.
    pub api_url: String,
    /// Bearer token. `None` disables outbound calls.
    pub api_key: Option<String>,
}

impl SummarizerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var      | Default                                   |
    /// |--------------|-------------------------------------------|
    /// | `HF_API_URL` | [`DEFAULT_API_URL`]                       |
    /// | `HF_API_KEY` | unset (empty value counts as unset)       |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("HF_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_key = lookup("HF_API_KEY").filter(|v| !v.is_empty());

        Self { api_url, api_key }
    }
}

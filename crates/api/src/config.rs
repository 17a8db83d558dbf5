use std::net::IpAddr;

use axum::http::HeaderValue;
use glocation_summarizer::SummarizerConfig;

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`). Credentials are not allowed in this mode.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got '{0}'")]
    InvalidHost(String),

    #[error("PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// Summarization service settings (`HF_API_URL`, `HF_API_KEY`).
    pub summarizer: SummarizerConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default   |
    /// |----------------|-----------|
    /// | `HOST`         | `0.0.0.0` |
    /// | `PORT`         | `3000`    |
    /// | `CORS_ORIGINS` | `*`       |
    ///
    /// See [`SummarizerConfig::from_env`] for the summarizer variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host: IpAddr = raw_host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(raw_host.clone()))?;

        let raw_port = lookup("PORT").unwrap_or_else(|| "3000".into());
        let port: u16 = raw_port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;

        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS").as_deref().unwrap_or("*"))?;

        let summarizer = SummarizerConfig::from_lookup(&lookup);

        Ok(Self {
            host,
            port,
            cors_origins,
            summarizer,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

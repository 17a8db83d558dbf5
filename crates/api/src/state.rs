use std::sync::Arc;

use glocation_summarizer::SummaryService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: glocation_db::DbPool,
    /// Summarization proxy used by the analysis endpoint.
    pub summarizer: Arc<SummaryService>,
}

impl AppState {
    /// Assemble state from a pool, building the summarization service
    /// from `config.summarizer`.
    pub fn new(pool: glocation_db::DbPool, config: &ServerConfig) -> Self {
        let summarizer = SummaryService::new(&config.summarizer);
        Self {
            pool,
            summarizer: Arc::new(summarizer),
        }
    }
}

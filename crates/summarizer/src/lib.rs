//! Client for the external text-summarization service.
//!
//! Wraps the HuggingFace inference endpoint used by the project analysis
//! route, normalises its loosely-shaped replies, and decides when no
//! outbound call is needed at all.

pub mod api;
pub mod config;
pub mod response;
pub mod service;

pub use api::{SummarizerApi, SummarizerError};
pub use config::SummarizerConfig;
pub use service::{Summary, SummaryService};

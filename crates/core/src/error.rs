use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The external summarization service could not be reached or
    /// answered with something unreadable.
    #[error("Upstream service error: {0}")]
    Upstream(String),
}

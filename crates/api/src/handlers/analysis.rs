//! Handler for the project description summary.

use axum::extract::State;
use axum::Json;
use glocation_db::repositories::ProjectRepo;
use glocation_summarizer::Summary;

use crate::error::{AppResult, ErrorResponse};
use crate::state::AppState;

/// POST /proyectos/analisis
///
/// Summarises every project description through the inference service.
#[utoipa::path(
    post,
    path = "/proyectos/analisis",
    tag = "analisis",
    responses(
        (status = 200, description = "Summary, or a notice when no call was made", body = Summary),
        (status = 500, description = "Summarization service failed", body = ErrorResponse)
    )
)]
pub async fn summarize(State(state): State<AppState>) -> AppResult<Json<Summary>> {
    let descriptions = ProjectRepo::list_descriptions(&state.pool).await?;
    let summary = state.summarizer.summarize(descriptions).await?;
    Ok(Json(summary))
}

//! Route definitions for the `/proyectos` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{analysis, project};
use crate::state::AppState;

/// Routes mounted at `/proyectos`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// GET    /graficos/estadisticas     -> status_counts
/// POST   /analisis                  -> summarize
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/graficos/estadisticas", get(project::status_counts))
        .route("/analisis", post(analysis::summarize))
}

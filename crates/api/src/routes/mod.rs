pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /proyectos                             list, create
/// /proyectos/{id}                        get, update, delete
/// /proyectos/graficos/estadisticas       project count per status (GET)
/// /proyectos/analisis                    summary of all descriptions (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/proyectos", project::router())
}

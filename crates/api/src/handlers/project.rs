//! Handlers for the `/proyectos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use glocation_core::types::DbId;
use glocation_db::models::project::{CreateProject, Project, StatusCount, UpdateProject};
use glocation_db::repositories::ProjectRepo;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult, ErrorResponse};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

/// Body returned after a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub ok: bool,
}

/// POST /proyectos
#[utoipa::path(
    post,
    path = "/proyectos",
    tag = "proyectos",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Invalid project fields", body = ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /proyectos
#[utoipa::path(
    get,
    path = "/proyectos",
    tag = "proyectos",
    responses(
        (status = 200, description = "Every project", body = [Project])
    )
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /proyectos/{id}
#[utoipa::path(
    get,
    path = "/proyectos/{id}",
    tag = "proyectos",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "The project", body = Project),
        (status = 404, description = "No such project", body = ErrorResponse)
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::project_not_found(id))?;
    Ok(Json(project))
}

/// PUT /proyectos/{id}
#[utoipa::path(
    put,
    path = "/proyectos/{id}",
    tag = "proyectos",
    params(("id" = i64, Path, description = "Project id")),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "The updated project", body = Project),
        (status = 400, description = "Invalid project fields", body = ErrorResponse),
        (status = 404, description = "No such project", body = ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::project_not_found(id))?;
    Ok(Json(project))
}

/// DELETE /proyectos/{id}
#[utoipa::path(
    delete,
    path = "/proyectos/{id}",
    tag = "proyectos",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project removed", body = DeleteResponse),
        (status = 404, description = "No such project", body = ErrorResponse)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Project deleted");
        Ok(Json(DeleteResponse { ok: true }))
    } else {
        Err(AppError::project_not_found(id))
    }
}

/// GET /proyectos/graficos/estadisticas
#[utoipa::path(
    get,
    path = "/proyectos/graficos/estadisticas",
    tag = "proyectos",
    responses(
        (status = 200, description = "Project count per observed status", body = [StatusCount])
    )
)]
pub async fn status_counts(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCount>>> {
    let counts = ProjectRepo::count_by_status(&state.pool).await?;
    Ok(Json(counts))
}

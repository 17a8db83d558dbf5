//! OpenAPI document served at `/docs`.

use glocation_db::models::project::{CreateProject, Project, StatusCount, UpdateProject};
use glocation_db::models::status::ProjectStatus;
use glocation_summarizer::Summary;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::{analysis, project};
use crate::routes::health::{self, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Glocation Test API",
        version = "1.0.0",
        description = "Documentación de la API de Glocation Test"
    ),
    paths(
        health::health_check,
        project::list,
        project::get_by_id,
        project::create,
        project::update,
        project::delete,
        project::status_counts,
        analysis::summarize,
    ),
    components(schemas(
        HealthResponse,
        Project,
        CreateProject,
        UpdateProject,
        ProjectStatus,
        StatusCount,
        Summary,
        project::DeleteResponse,
        ErrorResponse,
    )),
    tags(
        (name = "system", description = "Service health"),
        (name = "proyectos", description = "Project CRUD and statistics"),
        (name = "analisis", description = "Description summaries")
    )
)]
pub struct ApiDoc;

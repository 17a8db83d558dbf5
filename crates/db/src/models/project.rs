//! Project entity model and DTOs.
//!
//! JSON field names follow the public API (`nombre`, `fechaInicio`, ...);
//! columns are the snake_case equivalents.

use glocation_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::status::ProjectStatus;

/// A project row from the `proyectos` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[schema(value_type = i64, example = 1)]
    pub id: DbId,
    #[schema(example = "Portal de clientes")]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado: ProjectStatus,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_inicio: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_fin: Option<Timestamp>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[schema(example = "Portal de clientes")]
    pub nombre: String,
    pub descripcion: Option<String>,
    pub estado: ProjectStatus,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_inicio: Option<Timestamp>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_fin: Option<Timestamp>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `nombre` and `estado` are required columns, so `null` is treated the
/// same as leaving the field out. The nullable columns distinguish an
/// absent field (keep) from an explicit `null` (clear).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "glocation_core::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub descripcion: Option<Option<String>>,
    pub estado: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "glocation_core::nullable::deserialize")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_inicio: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "glocation_core::nullable::deserialize")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub fecha_fin: Option<Option<Timestamp>>,
}

/// One row of the per-status aggregate.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
pub struct StatusCount {
    pub estado: ProjectStatus,
    pub cantidad: i64,
}

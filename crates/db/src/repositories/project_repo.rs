//! Repository for the `proyectos` table.

use glocation_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, StatusCount, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, nombre, descripcion, estado, fecha_inicio, fecha_fin, created_at, updated_at";

/// Provides CRUD and aggregate operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Constraint violations (empty name, over-long name) come back as
    /// `sqlx::Error::Database` and are classified by the caller.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO proyectos (nombre, descripcion, estado, fecha_inicio, fecha_fin)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.nombre)
            .bind(&input.descripcion)
            .bind(input.estado)
            .bind(input.fecha_inicio)
            .bind(input.fecha_fin)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proyectos ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Descriptions of every project, in the same order as [`Self::list`].
    pub async fn list_descriptions(pool: &PgPool) -> Result<Vec<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT descripcion FROM proyectos ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only provided fields in `input` are applied.
    ///
    /// `descripcion`, `fecha_inicio` and `fecha_fin` use
    /// `Option<Option<_>>` so an explicit `null` clears the column.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE proyectos SET
                nombre       = COALESCE($2, nombre),
                descripcion  = CASE WHEN $3 THEN $4 ELSE descripcion END,
                estado       = COALESCE($5, estado),
                fecha_inicio = CASE WHEN $6 THEN $7 ELSE fecha_inicio END,
                fecha_fin    = CASE WHEN $8 THEN $9 ELSE fecha_fin END,
                updated_at   = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.nombre)
            .bind(input.descripcion.is_some())
            .bind(input.descripcion.as_ref().and_then(|v| v.as_deref()))
            .bind(input.estado)
            .bind(input.fecha_inicio.is_some())
            .bind(input.fecha_inicio.flatten())
            .bind(input.fecha_fin.is_some())
            .bind(input.fecha_fin.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM proyectos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count projects per status. Statuses with no projects are omitted.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT estado, COUNT(estado) AS cantidad
             FROM proyectos
             GROUP BY estado
             ORDER BY estado",
        )
        .fetch_all(pool)
        .await
    }
}

//! Status enums mapped onto PostgreSQL enum types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Project lifecycle status, stored as the `estado_proyecto` enum.
///
/// The serialized labels are the same strings the database stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_proyecto")]
pub enum ProjectStatus {
    #[serde(rename = "En progreso")]
    #[sqlx(rename = "En progreso")]
    InProgress,
    #[serde(rename = "Finalizado")]
    #[sqlx(rename = "Finalizado")]
    Finished,
}

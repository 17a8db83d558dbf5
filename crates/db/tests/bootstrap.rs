use sqlx::PgPool;

/// Connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn test_full_bootstrap(pool: PgPool) {
    glocation_db::health_check(&pool).await.unwrap();

    let labels: Vec<String> =
        sqlx::query_scalar("SELECT unnest(enum_range(NULL::estado_proyecto))::text")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(labels, ["En progreso", "Finalizado"]);
}

/// Re-running migrations against an up-to-date schema is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn test_sync_schema_is_idempotent(pool: PgPool) {
    glocation_db::sync_schema(&pool).await.unwrap();
}


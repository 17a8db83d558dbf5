//! HTTP-level tests for `POST /proyectos/analisis`.
//!
//! Requires a live PostgreSQL through `DATABASE_URL`; run with
//! `--features db-tests`. The inference service is replaced by wiremock.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_empty, post_json};
use glocation_core::analysis::{MISSING_CREDENTIAL, NOTHING_TO_SUMMARIZE};
use glocation_summarizer::SummarizerConfig;
use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{body_json as body_json_matcher, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn seed(pool: &PgPool, projects: &[serde_json::Value]) {
    for project in projects {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/proyectos", project.clone()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

fn config_with_server(server: &MockServer) -> glocation_api::config::ServerConfig {
    glocation_api::config::ServerConfig {
        summarizer: SummarizerConfig {
            api_url: format!("{}/models/facebook/bart-large-cnn", server.uri()),
            api_key: Some("hf_test".to_string()),
        },
        ..common::test_config()
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn no_descriptions_returns_fixed_message_without_outbound_call(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    seed(&pool, &[json!({"nombre": "Sin texto", "estado": "En progreso"})]).await;

    let app = common::build_test_app_with(pool, config_with_server(&server));
    let response = post_empty(app, "/proyectos/analisis").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"resumen": NOTHING_TO_SUMMARIZE})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn missing_key_returns_notice_with_sample(pool: PgPool) {
    seed(
        &pool,
        &[json!({"nombre": "P1", "descripcion": "Migrar el CRM", "estado": "En progreso"})],
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, "/proyectos/analisis").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"resumen": MISSING_CREDENTIAL, "sampleResumen": "Migrar el CRM"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn configured_key_forwards_descriptions_in_list_order(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json_matcher(json!({"inputs": "Primero\n\nSegundo"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"summary_text": "Dos proyectos."}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    seed(
        &pool,
        &[
            json!({"nombre": "A", "descripcion": "Primero", "estado": "En progreso"}),
            json!({"nombre": "B", "descripcion": "Segundo", "estado": "Finalizado"}),
        ],
    )
    .await;

    let app = common::build_test_app_with(pool, config_with_server(&server));
    let response = post_empty(app, "/proyectos/analisis").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"resumen": "Dos proyectos."}));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[cfg_attr(not(feature = "db-tests"), ignore = "requires DATABASE_URL")]
async fn unreadable_upstream_reply_returns_500(pool: PgPool) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    seed(
        &pool,
        &[json!({"nombre": "A", "descripcion": "texto", "estado": "En progreso"})],
    )
    .await;

    let app = common::build_test_app_with(pool, config_with_server(&server));
    let response = post_empty(app, "/proyectos/analisis").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].is_string());
}

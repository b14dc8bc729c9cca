//! Health check endpoint

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::data::SqliteService;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Health check endpoint
///
/// Reports `degraded` with 503 when the database does not answer.
pub async fn health(State(database): State<Arc<SqliteService>>) -> impl IntoResponse {
    let database_ok = sqlx::query("SELECT 1")
        .execute(database.pool())
        .await
        .is_ok();

    let (status, body_status, db_status) = if database_ok {
        (StatusCode::OK, "ok", "ok")
    } else {
        tracing::warn!("Health check failed: database unavailable");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
    };

    (
        status,
        Json(HealthResponse {
            status: body_status,
            version: env!("CARGO_PKG_VERSION"),
            database: db_status,
        }),
    )
}

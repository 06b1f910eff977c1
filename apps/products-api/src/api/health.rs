//! Readiness endpoint backed by the database health check

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;
use sea_orm::DatabaseConnection;
use serde_json::Value;

/// Readiness probe: verifies that the database connection is usable.
///
/// Returns 200 when every dependency responds, 503 otherwise. The
/// liveness probe lives at /health and never touches dependencies.
async fn ready(
    State(db): State<DatabaseConnection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

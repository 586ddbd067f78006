//! Health endpoints
//!
//! Postgres is the only dependency, so readiness reduces to a single
//! pool ping; liveness and `/health` report on the process alone.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

/// Body returned by every health endpoint
#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
}

impl HealthReport {
    fn process(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database: None,
        }
    }

    fn with_database(status: &'static str, database: &'static str) -> Self {
        Self {
            database: Some(database),
            ..Self::process(status)
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthReport> {
    Json(HealthReport::process("healthy"))
}

/// GET /health/ready - 503 until the database answers
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthReport>, (StatusCode, Json<HealthReport>)> {
    match db::ping(state.db()).await {
        Ok(()) => Ok(Json(HealthReport::with_database("ready", "reachable"))),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthReport::with_database("not_ready", "unreachable")),
            ))
        }
    }
}

/// GET /health/live - alive as long as the server answers at all
pub async fn liveness_check() -> Json<HealthReport> {
    Json(HealthReport::process("alive"))
}

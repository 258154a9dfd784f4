//! Liveness and readiness probes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub jira_configured: bool,
}

/// Liveness probe; the process is up
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe; reports whether a Jira connection is configured.
///
/// Still returns 200 without one - preview works regardless.
pub async fn readiness(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        jira_configured: state.is_connected(),
    })
}

//! Endpoint handlers.
//!
//! Both endpoints are constant: every call builds the same payload from the
//! service identity and touches no other state.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.info.id,
    })
}

/// Root informational message.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.info.name,
        version: state.info.version,
    })
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

use crate::config::Config;
use crate::errors::AppError;
use crate::models::SubmitResponse;
use crate::notify::NotificationDispatcher;
use crate::pipeline;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: PgPool,
    /// Application configuration.
    pub config: Config,
    /// Best-effort lead notification dispatcher.
    pub dispatcher: NotificationDispatcher,
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "lead-qualification-api",
            "version": "0.1.0"
        })),
    )
}

/// POST /qualification/submit
///
/// Runs the full submission pipeline for one lead. The body is taken as a
/// raw JSON value so the original payload can be snapshotted verbatim and
/// shape mismatches surface as the generic-message error class instead of
/// a framework rejection.
pub async fn submit_qualification(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<SubmitResponse>, AppError> {
    tracing::info!("POST /qualification/submit");
    let response = pipeline::submit(&state, &headers, payload).await?;
    Ok(Json(response))
}

//! HTTP API for the scoring engine
//!
//! Endpoints:
//! - GET /health - Health check
//! - GET /status - Gate state and attempt count
//! - POST /unlock - Unlock with a passphrase
//! - POST /compute - Score a set of lifts

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::ScoringEngine;
use crate::types::{GateStatus, RawInputs, ScoreReport};

/// App state
pub struct AppState {
    pub engine: ScoringEngine,
}

/// Unlock request
#[derive(Debug, Deserialize)]
pub struct UnlockRequest {
    pub passphrase: String,
}

/// Unlock response
#[derive(Debug, Serialize)]
pub struct UnlockResponse {
    pub unlocked: bool,
}

/// Gate status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub state: GateStatus,
    pub attempts: u64,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub unlocked: bool,
}

/// Create the API router
pub fn create_router(engine: ScoringEngine) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/health", get(health))
        .route("/status", get(status))
        .route("/unlock", post(unlock))
        .route("/compute", post(compute))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        unlocked: state.engine.is_unlocked(),
    })
}

/// Gate status
async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        state: state.engine.status(),
        attempts: state.engine.attempts(),
    })
}

/// Unlock the gate
async fn unlock(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UnlockRequest>,
) -> (StatusCode, Json<UnlockResponse>) {
    let unlocked = state.engine.unlock(&req.passphrase);
    let code = if unlocked { StatusCode::OK } else { StatusCode::UNAUTHORIZED };
    (code, Json(UnlockResponse { unlocked }))
}

/// Score a set of lifts
async fn compute(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<RawInputs>,
) -> Result<Json<ScoreReport>, StatusCode> {
    state
        .engine
        .compute(&inputs)
        .map(Json)
        .ok_or(StatusCode::LOCKED)
}

/// Run the API server
pub async fn run_server(addr: &str, engine: ScoringEngine) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(engine);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("LPO API running on {}", addr);
    println!("LPO scoring API running on {}", addr);
    println!("  GET  /health   - Health check");
    println!("  GET  /status   - Gate state");
    println!("  POST /unlock   - Unlock with passphrase");
    println!("  POST /compute  - Score lifts");
    axum::serve(listener, router).await?;
    Ok(())
}

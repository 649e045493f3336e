//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    state::{AppState, TimerStatus},
    tasks::TimerCommand,
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Apply a timer command and wrap the resulting snapshot
async fn drive(
    state: &AppState,
    command: TimerCommand,
    message: &str,
) -> Result<Json<ApiResponse>, StatusCode> {
    match state.apply(command).await {
        Ok(timer) => {
            info!("{} endpoint called - timer is {}", command.as_str(), timer.status.as_str());
            Ok(Json(ApiResponse::from_snapshot(message.to_string(), timer)))
        }
        Err(e) => {
            error!("Failed to {} timer: {}", command.as_str(), e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start - Begin the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    drive(&state, TimerCommand::Start, "Start requested").await
}

/// Handle POST /pause - Pause a running countdown
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    drive(&state, TimerCommand::Pause, "Pause requested").await
}

/// Handle POST /resume - Resume a paused countdown
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    drive(&state, TimerCommand::Resume, "Resume requested").await
}

/// Handle POST /reset - Return the timer to its initial state
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    drive(&state, TimerCommand::Reset, "Timer reset").await
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.get_timer_snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        running: timer.status == TimerStatus::Running,
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

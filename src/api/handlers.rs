//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{error::HelperError, state::AppState};
use super::responses::{
    EncounterResponse, EncounterSummary, HealthResponse, StatusResponse, TimerResponse,
};

fn status_for(e: HelperError) -> StatusCode {
    match e {
        HelperError::UnknownEncounter(slug) => {
            info!("Request for unknown encounter: {}", slug);
            StatusCode::NOT_FOUND
        }
        other => {
            error!("Request failed: {}", other);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle GET /encounters - List known encounters
pub async fn list_encounters_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<EncounterSummary>> {
    Json(
        state
            .encounters
            .iter()
            .map(|slot| EncounterSummary {
                slug: slot.encounter.slug.to_string(),
                title: slot.encounter.title.to_string(),
            })
            .collect(),
    )
}

/// Handle GET /encounters/:slug - Guide and phase table
pub async fn encounter_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<EncounterResponse>, StatusCode> {
    let slot = state.encounter(&slug).map_err(status_for)?;
    Ok(Json(EncounterResponse::from(&slot.encounter)))
}

/// Handle GET /encounters/:slug/timer - Current timer view
pub async fn timer_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let snapshot = state.timer_snapshot(&slug).map_err(status_for)?;
    Ok(Json(TimerResponse::new(&slug, snapshot)))
}

/// Handle POST /encounters/:slug/start - Reset and start the timer
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let snapshot = state.start_timer(&slug).map_err(status_for)?;
    info!("Start endpoint called for {}", slug);
    Ok(Json(TimerResponse::new(&slug, snapshot)))
}

/// Handle POST /encounters/:slug/stop - Freeze the timer
pub async fn stop_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<TimerResponse>, StatusCode> {
    let snapshot = state.stop_timer(&slug).map_err(status_for)?;
    info!("Stop endpoint called for {}", slug);
    Ok(Json(TimerResponse::new(&slug, snapshot)))
}

/// Handle GET /status - Return every timer and server metadata
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatusResponse>, StatusCode> {
    let timers = state
        .encounters
        .iter()
        .map(|slot| {
            slot.timer
                .snapshot()
                .map(|snapshot| TimerResponse::new(slot.encounter.slug, snapshot))
        })
        .collect::<Result<Vec<_>, HelperError>>()
        .map_err(status_for)?;

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timers,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::info;

use crate::{
    state::AppState,
    timer::{AdjustOutcome, Direction, TimerView},
};
use super::{
    errors::AppError,
    responses::{ActionResponse, HealthResponse, StatusResponse},
};

/// Reasons the shell keeps an adjustment control disabled
fn disabled_reasons(direction: Direction, view: &TimerView) -> Vec<String> {
    let mut reasons = Vec::new();
    if view.is_running {
        reasons.push("Cannot adjust the timer while it is running".to_string());
    }
    match direction {
        Direction::Add if !view.is_running && !view.can_add => {
            reasons.push("Timer is already at its maximum".to_string());
        }
        Direction::Subtract if !view.is_running && !view.can_subtract => {
            reasons.push("Timer cannot go below its minimum".to_string());
        }
        _ => {}
    }
    reasons
}

/// Handle GET /timer - Return the current render data
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Result<Json<TimerView>, AppError> {
    Ok(Json(state.get_view()?))
}

/// Handle POST /timer/adjust/:direction - Add or subtract one step
pub async fn adjust_handler(
    State(state): State<Arc<AppState>>,
    Path(direction): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    let direction: Direction = direction.parse().map_err(AppError::validation)?;

    let reasons = disabled_reasons(direction, &state.get_view()?);
    if !reasons.is_empty() {
        return Err(AppError::Validation(reasons));
    }

    let (outcome, view) = state.adjust(direction)?;
    if outcome == AdjustOutcome::Locked {
        // Started between the check above and the adjustment
        return Err(AppError::Validation(disabled_reasons(direction, &view)));
    }

    info!("Adjust endpoint called ({}) - {:?}", direction.as_str(), outcome);
    Ok(Json(ActionResponse::new(direction.as_str(), view)))
}

/// Handle POST /timer/toggle - Start or pause the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, AppError> {
    let view = state.toggle()?;
    info!("Toggle endpoint called - running={}", view.is_running);
    Ok(Json(ActionResponse::new("toggle", view)))
}

/// Handle POST /timer/reset - Stop and restore the default value
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ActionResponse>, AppError> {
    let view = state.reset()?;
    info!("Reset endpoint called");
    Ok(Json(ActionResponse::new("reset", view)))
}

/// Handle GET /status - Return the timer with server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, AppError> {
    let timer = state.get_view()?;
    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
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

/// Any unknown route
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{TimerBounds, TimerState};

    #[test]
    fn running_disables_both_directions() {
        let view = TimerState {
            remaining_seconds: 120,
            is_running: true,
        }
        .view(&TimerBounds::default());

        assert_eq!(disabled_reasons(Direction::Add, &view).len(), 1);
        assert_eq!(disabled_reasons(Direction::Subtract, &view).len(), 1);
    }

    #[test]
    fn bounds_disable_single_direction() {
        let bounds = TimerBounds::default();

        let floor = TimerState::idle(60).view(&bounds);
        assert!(disabled_reasons(Direction::Add, &floor).is_empty());
        assert_eq!(
            disabled_reasons(Direction::Subtract, &floor),
            vec!["Timer cannot go below its minimum".to_string()]
        );

        let ceiling = TimerState::idle(600).view(&bounds);
        assert!(disabled_reasons(Direction::Subtract, &ceiling).is_empty());
        assert_eq!(
            disabled_reasons(Direction::Add, &ceiling),
            vec!["Timer is already at its maximum".to_string()]
        );
    }
}

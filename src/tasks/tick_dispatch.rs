//! Tick dispatch background task

use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;
use super::tick_source::TickReceiver;

/// Background task that applies queued ticks to the countdown in arrival order
pub async fn tick_dispatch_task(state: Arc<AppState>, mut ticks: TickReceiver) {
    info!("Starting tick dispatch task");

    while let Some(id) = ticks.recv().await {
        if let Err(e) = state.apply_tick(id) {
            error!("Failed to apply tick: {}", e);
        }
    }

    info!("Tick queue closed, dispatch task exiting");
}

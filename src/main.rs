//! Countdown Clock - A countdown timer widget served over HTTP
//!
//! This is the main entry point for the countdown-clock application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use countdown_clock::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::tick_dispatch_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("countdown_clock={},tower_http=info", config.log_level()))
        .init();

    let bounds = config.bounds()
        .map_err(|e| anyhow::anyhow!("Invalid timer configuration: {}", e))?;

    info!("Starting countdown-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, window={}s..{}s, default={}s, step={}s, tick={:?}",
          config.host, config.port, bounds.min_seconds, bounds.max_seconds,
          bounds.default_seconds, bounds.step_seconds, bounds.tick_period);

    // Create application state and the queue its ticks arrive on
    let (state, ticks) = AppState::new(config.port, config.host.clone(), bounds);
    let state = Arc::new(state);

    // Start the tick dispatch background task
    let dispatch_state = Arc::clone(&state);
    tokio::spawn(async move {
        tick_dispatch_task(dispatch_state, ticks).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /timer                    - Current countdown display");
    info!("  POST /timer/adjust/add         - Add one step");
    info!("  POST /timer/adjust/subtract    - Subtract one step");
    info!("  POST /timer/toggle             - Start or pause");
    info!("  POST /timer/reset              - Stop and restore the default");
    info!("  GET  /status                   - Timer with server metadata");
    info!("  GET  /health                   - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.teardown() {
        tracing::error!("Failed to release tick source: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}

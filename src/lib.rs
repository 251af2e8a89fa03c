//! Countdown Clock - A countdown timer widget served over HTTP
//! 
//! This library provides a minute-adjustable countdown with a single
//! cancellable tick source, plus the HTTP shell that renders it and
//! dispatches user actions into it.

pub mod config;
pub mod timer;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use timer::{Direction, TimerBounds, TimerCore, TimerState, TimerView};
pub use utils::signals::shutdown_signal;

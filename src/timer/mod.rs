//! Countdown timer core
//!
//! This module contains the countdown state machine and the scheduler port
//! it drives its tick source through.

pub mod bounds;
pub mod machine;
pub mod scheduler;
pub mod state;

// Re-export main types
pub use machine::{AdjustOutcome, Direction, TimerCore};
pub use bounds::TimerBounds;
pub use scheduler::{ManualScheduler, Scheduler, TickId};
pub use state::{TimerState, TimerView};

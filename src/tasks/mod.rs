//! Background tasks module
//! 
//! This module contains the tick source and the task feeding its ticks into
//! the countdown.

pub mod tick_dispatch;
pub mod tick_source;

// Re-export main types
pub use tick_dispatch::tick_dispatch_task;
pub use tick_source::{TickReceiver, TokioScheduler};

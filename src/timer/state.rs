//! Countdown state and the render data derived from it

use serde::{Deserialize, Serialize};

use super::TimerBounds;

/// Countdown state owned by one timer instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u64,
    pub is_running: bool,
}

impl TimerState {
    /// Create an idle state holding `remaining_seconds`
    pub fn idle(remaining_seconds: u64) -> Self {
        Self {
            remaining_seconds,
            is_running: false,
        }
    }

    /// Whole minutes left
    pub fn minutes(&self) -> u64 {
        self.remaining_seconds / 60
    }

    /// Seconds past the last whole minute
    pub fn seconds(&self) -> u64 {
        self.remaining_seconds % 60
    }

    /// Build the render data, including which controls a shell should enable
    pub fn view(&self, bounds: &TimerBounds) -> TimerView {
        TimerView {
            minutes_display: format!("{:02}", self.minutes()),
            seconds_display: format!("{:02}", self.seconds()),
            remaining_seconds: self.remaining_seconds,
            is_running: self.is_running,
            can_add: !self.is_running && self.remaining_seconds < bounds.max_seconds,
            can_subtract: !self.is_running && bounds.subtracted(self.remaining_seconds).is_some(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle(TimerBounds::DEFAULT_START_SECONDS)
    }
}

/// What a presentation shell renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    pub minutes_display: String,
    pub seconds_display: String,
    pub remaining_seconds: u64,
    pub is_running: bool,
    pub can_add: bool,
    pub can_subtract: bool,
}

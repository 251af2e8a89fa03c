//! Countdown state machine
//!
//! `TimerCore` owns the countdown state and the handle of its single tick
//! source. Every transition is total: out-of-range requests are clamped or
//! ignored, never rejected.

use tracing::{debug, info, warn};

use super::{Scheduler, TickId, TimerBounds, TimerState, TimerView};

/// Direction of a one-step adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Subtract,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Add => "add",
            Direction::Subtract => "subtract",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "add" => Ok(Direction::Add),
            "subtract" => Ok(Direction::Subtract),
            other => Err(format!("Unknown direction '{}', expected 'add' or 'subtract'", other)),
        }
    }
}

/// What an adjustment did to the remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// Moved by a full step
    Applied,
    /// Held at a bound (ceiling reached or floor would be crossed)
    Clamped,
    /// Ignored because the countdown is running
    Locked,
}

/// Countdown state machine driving one tick source through a `Scheduler`
#[derive(Debug)]
pub struct TimerCore<S: Scheduler> {
    state: TimerState,
    bounds: TimerBounds,
    scheduler: S,
    active_tick: Option<TickId>,
    last_tick_id: TickId,
}

impl<S: Scheduler> TimerCore<S> {
    /// Create an idle countdown holding the default value
    pub fn new(bounds: TimerBounds, scheduler: S) -> Self {
        Self {
            state: TimerState::idle(bounds.default_seconds),
            bounds,
            scheduler,
            active_tick: None,
            last_tick_id: TickId::new(0),
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn bounds(&self) -> &TimerBounds {
        &self.bounds
    }

    pub fn view(&self) -> TimerView {
        self.state.view(&self.bounds)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Id of the running tick source, if any
    pub fn active_tick(&self) -> Option<TickId> {
        self.active_tick
    }

    /// Move the remaining time by one step in `direction`
    pub fn adjust(&mut self, direction: Direction) -> AdjustOutcome {
        if self.state.is_running {
            debug!("Ignoring {} adjustment while running", direction.as_str());
            return AdjustOutcome::Locked;
        }

        let current = self.state.remaining_seconds;
        let next = match direction {
            Direction::Add => self.bounds.added(current),
            Direction::Subtract => self.bounds.subtracted(current).unwrap_or(current),
        };

        let outcome = if next.abs_diff(current) == self.bounds.step_seconds {
            AdjustOutcome::Applied
        } else {
            AdjustOutcome::Clamped
        };

        if next != current {
            info!("Adjusted countdown ({}): {}s -> {}s", direction.as_str(), current, next);
            self.state.remaining_seconds = next;
        } else {
            debug!("Countdown held at {}s on {}", current, direction.as_str());
        }

        outcome
    }

    /// Flip between running and paused
    pub fn toggle_running(&mut self) -> TimerState {
        if self.state.is_running {
            info!("Pausing countdown at {}s", self.state.remaining_seconds);
            self.state.is_running = false;
            self.stop_ticking();
        } else {
            info!("Starting countdown at {}s", self.state.remaining_seconds);
            self.state.is_running = true;
            self.start_ticking();
        }
        self.state
    }

    /// Stop and restore the default value
    pub fn reset(&mut self) -> TimerState {
        info!("Resetting countdown to {}s", self.bounds.default_seconds);
        self.stop_ticking();
        self.state = TimerState::idle(self.bounds.default_seconds);
        self.state
    }

    /// Apply one tick delivered by source `id`
    ///
    /// Ticks from a source that is no longer active are ignored. Returns
    /// whether the tick was accepted.
    pub fn tick(&mut self, id: TickId) -> bool {
        if !self.state.is_running || self.active_tick != Some(id) {
            debug!("Dropping stale tick from source {}", id.raw());
            return false;
        }

        match self.state.remaining_seconds {
            0 => {}
            1 => {
                self.state.remaining_seconds = 0;
                info!("Countdown finished");
            }
            remaining => self.state.remaining_seconds = remaining - 1,
        }
        debug!("Tick: {}s remaining", self.state.remaining_seconds);
        true
    }

    /// Release the tick source without touching the countdown value
    ///
    /// Called on shutdown; also runs on drop.
    pub fn teardown(&mut self) {
        if self.active_tick.is_some() {
            info!("Releasing tick source on teardown");
        }
        self.stop_ticking();
        self.state.is_running = false;
    }

    fn start_ticking(&mut self) {
        if let Some(existing) = self.active_tick {
            warn!("Tick source {} already active, not starting another", existing.raw());
            return;
        }

        let id = self.last_tick_id.next();
        self.last_tick_id = id;
        self.active_tick = Some(id);
        self.scheduler.start(id, self.bounds.tick_period);
        debug!("Started tick source {}", id.raw());
    }

    fn stop_ticking(&mut self) {
        if let Some(id) = self.active_tick.take() {
            self.scheduler.cancel(id);
            debug!("Cancelled tick source {}", id.raw());
        }
    }
}

impl<S: Scheduler> Drop for TimerCore<S> {
    fn drop(&mut self) {
        self.stop_ticking();
    }
}

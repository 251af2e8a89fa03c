//! Main application state management

use std::{
    sync::{Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    tasks::{TickReceiver, TokioScheduler},
    timer::{AdjustOutcome, Direction, TickId, TimerBounds, TimerCore, TimerView},
};

/// Shared state hosting the countdown behind the HTTP shell
#[derive(Debug)]
pub struct AppState {
    /// The countdown and its tick source
    pub timer: Mutex<TimerCore<TokioScheduler>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Latest render data, republished after every change
    pub timer_update_tx: watch::Sender<TimerView>,
}

impl AppState {
    /// Create the state and the queue its tick source delivers on
    ///
    /// The queue has to be drained by `tick_dispatch_task`. Starting the
    /// countdown spawns onto the current Tokio runtime.
    pub fn new(port: u16, host: String, bounds: TimerBounds) -> (Self, TickReceiver) {
        let (scheduler, ticks) = TokioScheduler::new();
        let timer = TimerCore::new(bounds, scheduler);
        let (timer_update_tx, _) = watch::channel(timer.view());

        let state = Self {
            timer: Mutex::new(timer),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            timer_update_tx,
        };
        (state, ticks)
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, TimerCore<TokioScheduler>>, String> {
        self.timer.lock()
            .map_err(|e| format!("Failed to lock timer: {}", e))
    }

    /// Run a user action against the countdown and publish the result
    fn update_timer<F, R>(&self, action: &str, updater: F) -> Result<(R, TimerView), String>
    where
        F: FnOnce(&mut TimerCore<TokioScheduler>) -> R,
    {
        let mut timer = self.lock_timer()?;
        let result = updater(&mut *timer);
        let view = timer.view();
        drop(timer);

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.timer_update_tx.send_replace(view.clone());
        Ok((result, view))
    }

    /// Add or subtract one step
    pub fn adjust(&self, direction: Direction) -> Result<(AdjustOutcome, TimerView), String> {
        self.update_timer(direction.as_str(), |timer| timer.adjust(direction))
    }

    /// Start or pause the countdown
    pub fn toggle(&self) -> Result<TimerView, String> {
        self.update_timer("toggle", |timer| {
            timer.toggle_running();
        })
        .map(|(_, view)| view)
    }

    /// Stop and restore the default value
    pub fn reset(&self) -> Result<TimerView, String> {
        self.update_timer("reset", |timer| {
            timer.reset();
        })
        .map(|(_, view)| view)
    }

    /// Apply a tick from the dispatch queue
    pub fn apply_tick(&self, id: TickId) -> Result<bool, String> {
        let mut timer = self.lock_timer()?;
        let applied = timer.tick(id);
        let view = timer.view();
        drop(timer);

        if applied {
            self.timer_update_tx.send_replace(view);
        }
        Ok(applied)
    }

    /// Current render data
    pub fn get_view(&self) -> Result<TimerView, String> {
        self.lock_timer().map(|timer| timer.view())
    }

    /// Subscribe to render data updates
    pub fn subscribe(&self) -> watch::Receiver<TimerView> {
        self.timer_update_tx.subscribe()
    }

    /// Release the tick source before shutdown
    pub fn teardown(&self) -> Result<(), String> {
        let mut timer = self.lock_timer()?;
        timer.teardown();
        let view = timer.view();
        drop(timer);

        debug!("Timer torn down at {}s", view.remaining_seconds);
        self.timer_update_tx.send_replace(view);
        info!("Tick source released");
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

//! Tokio-backed tick source

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, warn};

use crate::timer::{Scheduler, TickId};

/// Receiving end of the tick queue
pub type TickReceiver = mpsc::UnboundedReceiver<TickId>;

/// Scheduler that spawns one interval task per started source
///
/// Each task pushes its `TickId` onto a queue once per period. Cancelling
/// aborts the task; ticks it already queued are rejected by the timer core
/// because their id no longer matches the active one.
#[derive(Debug)]
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<TickId>,
    running: Option<(TickId, JoinHandle<()>)>,
}

impl TokioScheduler {
    /// Create a scheduler and the queue its ticks are delivered on
    pub fn new() -> (Self, TickReceiver) {
        let (ticks, rx) = mpsc::unbounded_channel();
        (Self { ticks, running: None }, rx)
    }

    /// Whether an interval task is currently alive
    pub fn is_active(&self) -> bool {
        self.running
            .as_ref()
            .map(|(_, handle)| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Scheduler for TokioScheduler {
    fn start(&mut self, id: TickId, period: Duration) {
        if let Some((previous, handle)) = self.running.take() {
            warn!("Aborting leftover tick task {} before starting {}", previous.raw(), id.raw());
            handle.abort();
        }

        let ticks = self.ticks.clone();
        let handle = tokio::spawn(async move {
            // First tick one full period after start
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if ticks.send(id).is_err() {
                    debug!("Tick queue closed, stopping tick task {}", id.raw());
                    break;
                }
            }
        });

        self.running = Some((id, handle));
    }

    fn cancel(&mut self, id: TickId) {
        match self.running.take() {
            Some((running, handle)) if running == id => handle.abort(),
            Some(other) => {
                warn!("Cancel for {} does not match running tick task {}", id.raw(), other.0.raw());
                self.running = Some(other);
            }
            None => debug!("Cancel for {} with no tick task running", id.raw()),
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.running.take() {
            handle.abort();
        }
    }
}

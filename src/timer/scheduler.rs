//! Scheduler port used by the timer core to start and cancel its tick source

use std::time::Duration;

/// Identifies one started tick source
///
/// A fresh id is issued for every start, so ticks delivered by a cancelled
/// source can be told apart from ticks of the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(u64);

impl TickId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Host-supplied source of periodic ticks
///
/// Implementations deliver `id` back to the owner of the timer core once per
/// `period` until `cancel(id)` is called.
pub trait Scheduler {
    fn start(&mut self, id: TickId, period: Duration);
    fn cancel(&mut self, id: TickId);
}

/// Synchronous scheduler that only records calls
///
/// Ticks are delivered by the caller invoking `TimerCore::tick` with
/// `active()` directly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    active: Option<TickId>,
    period: Option<Duration>,
    starts: u32,
    cancels: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently running source, if any
    pub fn active(&self) -> Option<TickId> {
        self.active
    }

    /// Period of the most recent start
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn starts(&self) -> u32 {
        self.starts
    }

    pub fn cancels(&self) -> u32 {
        self.cancels
    }

    /// Sources started and not yet cancelled
    pub fn live_sources(&self) -> u32 {
        self.starts - self.cancels
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, id: TickId, period: Duration) {
        self.starts += 1;
        self.active = Some(id);
        self.period = Some(period);
    }

    fn cancel(&mut self, id: TickId) {
        self.cancels += 1;
        if self.active == Some(id) {
            self.active = None;
        }
    }
}

//! Value window and step configuration for the countdown

use std::time::Duration;

/// Clamp window, adjustment step and tick period for one countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerBounds {
    /// Floor for subtract adjustments
    pub min_seconds: u64,
    /// Ceiling for add adjustments
    pub max_seconds: u64,
    /// Value restored on reset and on creation
    pub default_seconds: u64,
    /// Size of one adjustment
    pub step_seconds: u64,
    pub tick_period: Duration,
}

impl TimerBounds {
    pub const DEFAULT_MIN_SECONDS: u64 = 60;
    pub const DEFAULT_MAX_SECONDS: u64 = 600;
    pub const DEFAULT_START_SECONDS: u64 = 60;
    pub const DEFAULT_STEP_SECONDS: u64 = 60;
    pub const DEFAULT_TICK_MILLIS: u64 = 1000;
    /// Exclusive upper limit for any countdown value, keeping minutes to two digits
    pub const LIMIT_SECONDS: u64 = 3600;

    /// Check that the window is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.step_seconds == 0 {
            return Err("step must be at least one second".to_string());
        }
        if self.tick_period.is_zero() {
            return Err("tick period must be greater than zero".to_string());
        }
        if self.min_seconds > self.max_seconds {
            return Err(format!(
                "minimum ({}s) is greater than maximum ({}s)",
                self.min_seconds, self.max_seconds
            ));
        }
        if self.max_seconds >= Self::LIMIT_SECONDS {
            return Err(format!(
                "maximum ({}s) must be below {}s",
                self.max_seconds,
                Self::LIMIT_SECONDS
            ));
        }
        if self.default_seconds < self.min_seconds || self.default_seconds > self.max_seconds {
            return Err(format!(
                "default ({}s) is outside [{}s, {}s]",
                self.default_seconds, self.min_seconds, self.max_seconds
            ));
        }
        Ok(())
    }

    /// Value after one add step, held at the ceiling
    pub fn added(&self, remaining_seconds: u64) -> u64 {
        remaining_seconds
            .saturating_add(self.step_seconds)
            .min(self.max_seconds)
    }

    /// Value after one subtract step, or `None` when it would cross the floor
    pub fn subtracted(&self, remaining_seconds: u64) -> Option<u64> {
        remaining_seconds
            .checked_sub(self.step_seconds)
            .filter(|&value| value >= self.min_seconds)
    }
}

impl Default for TimerBounds {
    fn default() -> Self {
        Self {
            min_seconds: Self::DEFAULT_MIN_SECONDS,
            max_seconds: Self::DEFAULT_MAX_SECONDS,
            default_seconds: Self::DEFAULT_START_SECONDS,
            step_seconds: Self::DEFAULT_STEP_SECONDS,
            tick_period: Duration::from_millis(Self::DEFAULT_TICK_MILLIS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_valid() {
        assert_eq!(TimerBounds::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_unusable_windows() {
        let base = TimerBounds::default();

        assert!(TimerBounds { step_seconds: 0, ..base }.validate().is_err());
        assert!(TimerBounds { tick_period: Duration::ZERO, ..base }.validate().is_err());
        assert!(TimerBounds { min_seconds: 700, ..base }.validate().is_err());
        assert!(TimerBounds { default_seconds: 30, ..base }.validate().is_err());
        assert!(TimerBounds { default_seconds: 660, ..base }.validate().is_err());
        assert!(TimerBounds { max_seconds: 3600, ..base }.validate().is_err());
        assert!(TimerBounds { max_seconds: 360_000, ..base }.validate().is_err());
        assert_eq!(TimerBounds { max_seconds: 3599, ..base }.validate(), Ok(()));
    }

    #[test]
    fn add_holds_at_ceiling() {
        let bounds = TimerBounds::default();
        assert_eq!(bounds.added(60), 120);
        assert_eq!(bounds.added(570), 600);
        assert_eq!(bounds.added(600), 600);
        assert_eq!(bounds.added(u64::MAX), 600);
    }

    #[test]
    fn subtract_refuses_to_cross_floor() {
        let bounds = TimerBounds::default();
        assert_eq!(bounds.subtracted(180), Some(120));
        assert_eq!(bounds.subtracted(120), Some(60));
        assert_eq!(bounds.subtracted(119), None);
        assert_eq!(bounds.subtracted(60), None);
        assert_eq!(bounds.subtracted(0), None);
    }
}

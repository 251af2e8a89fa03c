//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::timer::TimerBounds;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-clock")]
#[command(about = "A countdown timer widget served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Lowest value a subtract adjustment may reach, in seconds
    #[arg(long, default_value_t = TimerBounds::DEFAULT_MIN_SECONDS)]
    pub min_seconds: u64,

    /// Highest value an add adjustment may reach, in seconds
    #[arg(long, default_value_t = TimerBounds::DEFAULT_MAX_SECONDS)]
    pub max_seconds: u64,

    /// Value on start-up and after reset, in seconds
    #[arg(long, default_value_t = TimerBounds::DEFAULT_START_SECONDS)]
    pub default_seconds: u64,

    /// Size of one add/subtract adjustment, in seconds
    #[arg(long, default_value_t = TimerBounds::DEFAULT_STEP_SECONDS)]
    pub step_seconds: u64,

    /// Interval between ticks, in milliseconds
    #[arg(long, default_value_t = TimerBounds::DEFAULT_TICK_MILLIS)]
    pub tick_millis: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Countdown bounds, validated
    pub fn bounds(&self) -> Result<TimerBounds, String> {
        let bounds = TimerBounds {
            min_seconds: self.min_seconds,
            max_seconds: self.max_seconds,
            default_seconds: self.default_seconds,
            step_seconds: self.step_seconds,
            tick_period: Duration::from_millis(self.tick_millis),
        };
        bounds.validate()?;
        Ok(bounds)
    }
}

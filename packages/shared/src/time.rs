//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, Local};

/// Format used for human-readable message timestamps, e.g. `3:04:05 PM`.
pub const LOCAL_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current server-local time
    fn now(&self) -> DateTime<Local>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<Local>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: DateTime<Local>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.fixed_time
    }
}

/// Render a local time as a human-readable wall-clock string
pub fn format_local_time(time: &DateTime<Local>) -> String {
    time.format(LOCAL_TIME_FORMAT).to_string()
}

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current instant. Validation reads the local wall-clock
/// part; confirmation ids read the epoch milliseconds.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Clock backed by the browser / OS local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fixed clock for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<FixedOffset>,
}

impl FixedClock {
    pub const fn new(time: DateTime<FixedOffset>) -> Self {
        Self { time }
    }

    /// Parse an RFC 3339 timestamp, e.g. `"2026-10-14T22:00:00+00:00"`
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.time
    }
}

//! Source of "now" for the log store.

use chrono::{DateTime, FixedOffset, Local, NaiveDate};

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Calendar date in the clock's own timezone.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Parse an RFC 3339 timestamp such as `2024-03-15T08:30:00+02:00`.
    pub fn parse(rfc3339: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(rfc3339).ok().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

//! Time source and timestamp-derived record ids.

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Issues record ids from the current time in Unix milliseconds.
///
/// Ids are strictly increasing within one generator: when the clock has not
/// advanced past the last issued id, the next id is last + 1. Ids from two
/// separate generators may still collide.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = if millis > self.last { millis } else { self.last + 1 };
        self.last = id;
        id.to_string()
    }
}

//! The game clock: the single source of temporal truth for the service.
//!
//! Completion of crafting jobs is a derived property of stored timestamps
//! against "now" -- there is no scheduler, so whoever supplies "now"
//! decides everything temporal. The engines take `now` as a parameter;
//! the service reads it from a [`GameClock`] so production uses the wall
//! clock and tests drive time by hand.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// Milliseconds in one calendar day.
const MS_PER_DAY: u64 = 86_400_000;

/// Format an epoch-millisecond timestamp as a YYYY-MM-DD day string.
fn day_string(ms: u64) -> String {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Source of the current time for the service.
pub trait GameClock {
    /// Current time in epoch milliseconds.
    fn now_ms(&self) -> u64;

    /// Today's calendar day (UTC) as a YYYY-MM-DD string.
    fn today(&self) -> String {
        day_string(self.now_ms())
    }

    /// Yesterday's calendar day (UTC) as a YYYY-MM-DD string.
    fn yesterday(&self) -> String {
        day_string(self.now_ms().saturating_sub(MS_PER_DAY))
    }
}

/// Wall-clock time (production).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl GameClock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Manually advanced time (tests and local simulation).
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock pinned at the given epoch-millisecond instant.
    pub fn at(now_ms: u64) -> Self {
        let clock = Self::default();
        clock.set(now_ms);
        clock
    }

    /// Pin the clock at an instant.
    pub fn set(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    /// Advance the clock by a duration in milliseconds.
    pub fn advance_ms(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Advance the clock by whole days.
    pub fn advance_days(&self, days: u64) {
        self.advance_ms(days.saturating_mul(MS_PER_DAY));
    }
}

impl GameClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

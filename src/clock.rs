//! Monotonic time sources.
//!
//! The dispatcher reads time through the [`TimeSource`] trait so that tests
//! can drive the loop deterministically. All times are in microseconds
//! relative to the source's own epoch; only differences are meaningful.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A monotonic clock with microsecond resolution.
///
/// Implementations must be monotonic: successive calls never go backwards,
/// and wall-clock adjustments must not be visible.
pub trait TimeSource {
    /// Current time in microseconds since the source's epoch.
    fn now_us(&self) -> i64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now_us(&self) -> i64 {
        (**self).now_us()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now_us(&self) -> i64 {
        (**self).now_us()
    }
}

/// Process-local monotonic clock backed by [`Instant`].
///
/// The epoch is the moment of construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now_us(&self) -> i64 {
        self.origin.elapsed().as_micros() as i64
    }
}

/// Hand-advanced clock for deterministic tests and simulations.
///
/// Shared freely (`Arc<ManualClock>`) so a simulated job body can advance
/// the same clock the dispatch loop reads.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_us: AtomicI64,
}

impl ManualClock {
    /// Creates a clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock at the given time.
    pub fn at(now_us: i64) -> Self {
        Self {
            now_us: AtomicI64::new(now_us),
        }
    }

    /// Advances the clock by `delta_us` microseconds.
    pub fn advance(&self, delta_us: i64) {
        self.now_us.fetch_add(delta_us, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now_us(&self) -> i64 {
        self.now_us.load(Ordering::SeqCst)
    }
}

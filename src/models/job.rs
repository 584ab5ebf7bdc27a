//! Periodic job record.
//!
//! A job is one periodic real-time activity: a stable identifier, a fixed
//! period, and the absolute deadline of its current activation. The deadline
//! advances by exactly one period per dispatch; see [`Job::rearm`].

/// A periodic job tracked by the dispatcher.
///
/// Fields are private: the only mutation the rest of the crate can perform
/// is [`rearm`](Job::rearm), so the deadline is non-decreasing by
/// construction.
///
/// # Time Representation
/// All times are in microseconds on the dispatcher's
/// [`TimeSource`](crate::clock::TimeSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: u32,
    period_us: i64,
    next_deadline_us: i64,
}

impl Job {
    /// Creates a job with its first deadline already armed.
    ///
    /// The period must be positive; [`crate::validation`] rejects anything
    /// else before a job can be constructed.
    pub(crate) fn new(id: u32, period_us: i64, first_deadline_us: i64) -> Self {
        debug_assert!(period_us > 0);
        Self {
            id,
            period_us,
            next_deadline_us: first_deadline_us,
        }
    }

    /// Stable job identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Fixed activation period in microseconds.
    pub fn period_us(&self) -> i64 {
        self.period_us
    }

    /// Absolute deadline of the current activation.
    pub fn next_deadline_us(&self) -> i64 {
        self.next_deadline_us
    }

    /// Advances the deadline by exactly one period.
    ///
    /// The new deadline is relative to the old deadline, not to completion
    /// time: the schedule is rate-based, so a chronically overrunning job
    /// falls ever further behind the clock instead of being resynchronized.
    pub(crate) fn rearm(&mut self) {
        self.next_deadline_us += self.period_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_accessors() {
        let job = Job::new(3, 200_000, 250_000);
        assert_eq!(job.id(), 3);
        assert_eq!(job.period_us(), 200_000);
        assert_eq!(job.next_deadline_us(), 250_000);
    }

    #[test]
    fn test_rearm_adds_one_period() {
        let mut job = Job::new(1, 100_000, 100_000);
        job.rearm();
        assert_eq!(job.next_deadline_us(), 200_000);
    }

    #[test]
    fn test_rearm_strictly_additive() {
        // After k rearms the deadline is initial + k*period, regardless of
        // anything that happened in between.
        let mut job = Job::new(1, 100_000, 50_000);
        for k in 1..=10 {
            job.rearm();
            assert_eq!(job.next_deadline_us(), 50_000 + k * 100_000);
        }
    }
}

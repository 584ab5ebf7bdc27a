//! Deadline monitoring.
//!
//! Pure observation and classification: lateness is measured against the
//! job's absolute deadline at the moment dispatch is about to occur, and a
//! miss is anything strictly beyond the tolerance. Classification never
//! blocks or cancels the dispatch — a missed job still runs to completion.

use tracing::{info, warn};

use crate::models::Job;

/// Timeliness of one activation at its pre-dispatch check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeliness {
    /// Lateness within tolerance (boundary-equal lateness is on-time).
    OnTime,
    /// Lateness strictly beyond tolerance.
    Missed {
        /// How far past the deadline the dispatch happened (µs).
        lateness_us: i64,
    },
}

/// Classifies lateness against a tolerance.
///
/// `lateness = now - deadline`; zero or negative means on-time or early.
/// A miss requires `lateness > tolerance`; equality stays on-time.
pub fn classify(now_us: i64, deadline_us: i64, tolerance_us: i64) -> Timeliness {
    let lateness_us = now_us - deadline_us;
    if lateness_us > tolerance_us {
        Timeliness::Missed { lateness_us }
    } else {
        Timeliness::OnTime
    }
}

/// Full timing record of one dispatched activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationRecord {
    /// Job that was dispatched.
    pub job_id: u32,
    /// The deadline this activation was held against.
    pub deadline_us: i64,
    /// Wall time of actual dispatch (pre-check instant).
    pub dispatched_at_us: i64,
    /// Wall time at body completion.
    pub completed_at_us: i64,
    /// Pre-dispatch classification.
    pub timeliness: Timeliness,
}

impl ActivationRecord {
    /// Lateness at dispatch (negative = dispatched early).
    pub fn lateness_us(&self) -> i64 {
        self.dispatched_at_us - self.deadline_us
    }

    /// Total elapsed time of the activation, queuing delay included.
    pub fn elapsed_us(&self) -> i64 {
        self.completed_at_us - self.dispatched_at_us
    }

    /// Whether the pre-check classified this activation as missed.
    pub fn missed(&self) -> bool {
        matches!(self.timeliness, Timeliness::Missed { .. })
    }
}

/// Classifies and reports activation timeliness.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineMonitor {
    tolerance_us: i64,
}

impl DeadlineMonitor {
    /// Creates a monitor with the given tolerance.
    pub fn new(tolerance_us: i64) -> Self {
        Self { tolerance_us }
    }

    /// Lateness tolerance in microseconds.
    pub fn tolerance_us(&self) -> i64 {
        self.tolerance_us
    }

    /// Pre-dispatch check: classifies lateness and emits a warning on a
    /// miss. Emitted exactly once per activation; never alters dispatch.
    pub fn pre_check(&self, job: &Job, now_us: i64) -> Timeliness {
        let timeliness = classify(now_us, job.next_deadline_us(), self.tolerance_us);
        if let Timeliness::Missed { lateness_us } = timeliness {
            warn!(
                job_id = job.id(),
                lateness_ms = lateness_us / 1000,
                "deadline missed"
            );
        }
        timeliness
    }

    /// Post-execution check: reports total elapsed time for the activation.
    pub fn post_check(&self, record: &ActivationRecord) {
        info!(
            job_id = record.job_id,
            total_ms = record.elapsed_us() / 1000,
            "activation complete"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_early_is_on_time() {
        assert_eq!(classify(90, 100, 5), Timeliness::OnTime);
    }

    #[test]
    fn test_exact_deadline_is_on_time() {
        assert_eq!(classify(100, 100, 5), Timeliness::OnTime);
    }

    #[test]
    fn test_boundary_lateness_equal_tolerance_is_on_time() {
        assert_eq!(classify(105, 100, 5), Timeliness::OnTime);
    }

    #[test]
    fn test_lateness_beyond_tolerance_is_missed() {
        assert_eq!(classify(106, 100, 5), Timeliness::Missed { lateness_us: 6 });
    }

    #[test]
    fn test_record_arithmetic() {
        let record = ActivationRecord {
            job_id: 2,
            deadline_us: 200_000,
            dispatched_at_us: 203_000,
            completed_at_us: 283_000,
            timeliness: Timeliness::OnTime,
        };
        assert_eq!(record.lateness_us(), 3_000);
        assert_eq!(record.elapsed_us(), 80_000);
        assert!(!record.missed());
    }

    #[test]
    fn test_pre_check_classifies_like_classify() {
        let monitor = DeadlineMonitor::new(5_000);
        let job = Job::new(1, 100_000, 100_000);
        assert_eq!(monitor.pre_check(&job, 104_000), Timeliness::OnTime);
        assert_eq!(
            monitor.pre_check(&job, 110_000),
            Timeliness::Missed {
                lateness_us: 10_000
            }
        );
    }
}

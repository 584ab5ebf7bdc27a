//! Cumulative dispatch statistics.
//!
//! Aggregates per-activation records into loop-lifetime counters: total
//! activations, deadline misses, worst lateness, and busy time, plus a
//! per-job breakdown.

use crate::dispatch::monitor::ActivationRecord;

/// Per-job counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobStats {
    /// Job identifier.
    pub job_id: u32,
    /// Activations dispatched.
    pub activations: u64,
    /// Activations classified as missed at the pre-check.
    pub deadline_misses: u64,
}

/// Loop-lifetime dispatch statistics.
#[derive(Debug, Clone, Default)]
pub struct DispatchStats {
    /// Total activations dispatched.
    pub activations: u64,
    /// Total activations classified as missed.
    pub deadline_misses: u64,
    /// Worst lateness observed at any pre-check (µs, 0 if none late).
    pub max_lateness_us: i64,
    /// Total time spent inside job bodies, queuing included (µs).
    pub total_busy_us: i64,
    /// Per-job breakdown, in first-seen order.
    pub per_job: Vec<JobStats>,
}

impl DispatchStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one activation record into the counters.
    pub fn record(&mut self, record: &ActivationRecord) {
        self.activations += 1;
        self.total_busy_us += record.elapsed_us();
        self.max_lateness_us = self.max_lateness_us.max(record.lateness_us());

        let missed = record.missed();
        if missed {
            self.deadline_misses += 1;
        }

        match self.per_job.iter_mut().find(|j| j.job_id == record.job_id) {
            Some(entry) => {
                entry.activations += 1;
                if missed {
                    entry.deadline_misses += 1;
                }
            }
            None => self.per_job.push(JobStats {
                job_id: record.job_id,
                activations: 1,
                deadline_misses: u64::from(missed),
            }),
        }
    }

    /// Counters for one job, if it has been dispatched at all.
    pub fn for_job(&self, job_id: u32) -> Option<&JobStats> {
        self.per_job.iter().find(|j| j.job_id == job_id)
    }

    /// Fraction of activations that met their deadline (1.0 when idle).
    pub fn on_time_rate(&self) -> f64 {
        if self.activations == 0 {
            1.0
        } else {
            (self.activations - self.deadline_misses) as f64 / self.activations as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::monitor::Timeliness;

    fn record(job_id: u32, deadline: i64, dispatched: i64, completed: i64) -> ActivationRecord {
        let lateness = dispatched - deadline;
        let timeliness = if lateness > 5_000 {
            Timeliness::Missed {
                lateness_us: lateness,
            }
        } else {
            Timeliness::OnTime
        };
        ActivationRecord {
            job_id,
            deadline_us: deadline,
            dispatched_at_us: dispatched,
            completed_at_us: completed,
            timeliness,
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = DispatchStats::new();
        assert_eq!(stats.activations, 0);
        assert!((stats.on_time_rate() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = DispatchStats::new();
        stats.record(&record(1, 100_000, 101_000, 181_000)); // on-time
        stats.record(&record(2, 100_000, 120_000, 200_000)); // missed by 20ms
        stats.record(&record(1, 200_000, 201_000, 281_000)); // on-time

        assert_eq!(stats.activations, 3);
        assert_eq!(stats.deadline_misses, 1);
        assert_eq!(stats.max_lateness_us, 20_000);
        assert_eq!(stats.total_busy_us, 240_000);
        assert!((stats.on_time_rate() - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_per_job_breakdown() {
        let mut stats = DispatchStats::new();
        stats.record(&record(1, 100_000, 100_000, 180_000));
        stats.record(&record(2, 100_000, 150_000, 230_000));
        stats.record(&record(2, 200_000, 250_000, 330_000));

        let j1 = stats.for_job(1).unwrap();
        assert_eq!(j1.activations, 1);
        assert_eq!(j1.deadline_misses, 0);

        let j2 = stats.for_job(2).unwrap();
        assert_eq!(j2.activations, 2);
        assert_eq!(j2.deadline_misses, 2);

        assert!(stats.for_job(99).is_none());
    }
}

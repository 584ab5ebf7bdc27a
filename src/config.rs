//! Dispatcher configuration.
//!
//! Everything here is fixed at startup: the job set, the nominal phase
//! durations of the simulated transfer, the polling quantum, and the
//! lateness tolerance. Nothing is runtime-mutable once the loop starts.

use serde::{Deserialize, Serialize};

/// Declares one periodic job to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Unique job identifier.
    pub id: u32,
    /// Activation period in microseconds. Must be positive.
    pub period_us: i64,
}

impl JobSpec {
    /// Creates a job spec.
    pub fn new(id: u32, period_us: i64) -> Self {
        Self { id, period_us }
    }
}

/// Startup configuration for a [`Dispatcher`](crate::dispatch::Dispatcher).
///
/// Defaults mirror the reference sensor-bus deployment: 200 ms period,
/// 40 ms read + 40 ms send phases, 5 ms tolerance, 1 ms polling quantum.
/// The job set is empty by default and must be populated; an empty set is
/// a configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Jobs to dispatch. Fixed for the process lifetime.
    pub jobs: Vec<JobSpec>,
    /// Nominal duration of the simulated read phase (µs).
    pub read_phase_us: i64,
    /// Nominal duration of the simulated send phase (µs).
    pub send_phase_us: i64,
    /// Idle sleep between polling cycles (µs). Must be positive.
    pub poll_quantum_us: i64,
    /// Maximum lateness still classified on-time (µs). Must be positive.
    pub tolerance_us: i64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            read_phase_us: 40_000,
            send_phase_us: 40_000,
            poll_quantum_us: 1_000,
            tolerance_us: 5_000,
        }
    }
}

impl DispatcherConfig {
    /// Creates a configuration with the reference defaults and no jobs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job.
    pub fn with_job(mut self, spec: JobSpec) -> Self {
        self.jobs.push(spec);
        self
    }

    /// Adds `count` jobs with ids `1..=count`, all sharing `period_us`.
    pub fn with_uniform_jobs(mut self, count: u32, period_us: i64) -> Self {
        for id in 1..=count {
            self.jobs.push(JobSpec::new(id, period_us));
        }
        self
    }

    /// Sets the simulated phase durations.
    pub fn with_phases(mut self, read_us: i64, send_us: i64) -> Self {
        self.read_phase_us = read_us;
        self.send_phase_us = send_us;
        self
    }

    /// Sets the polling quantum.
    pub fn with_poll_quantum(mut self, quantum_us: i64) -> Self {
        self.poll_quantum_us = quantum_us;
        self
    }

    /// Sets the lateness tolerance.
    pub fn with_tolerance(mut self, tolerance_us: i64) -> Self {
        self.tolerance_us = tolerance_us;
        self
    }
}

//! The dispatch loop.
//!
//! A single control flow drives every activation: read the clock, select
//! the most urgent job, check readiness, classify lateness, run the body
//! under the bus lock, report timing, re-arm, idle one quantum. Dispatch is
//! non-preemptive and run-to-completion — a long body delays evaluation of
//! every other job's deadline for its whole duration, which is exactly how
//! lower-urgency jobs come to miss under load.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::clock::TimeSource;
use crate::config::DispatcherConfig;
use crate::dispatch::executor::{execute, JobBody};
use crate::dispatch::monitor::{ActivationRecord, DeadlineMonitor};
use crate::dispatch::selector::earliest_deadline;
use crate::dispatch::stats::DispatchStats;
use crate::models::{Job, SensorBus};
use crate::validation::{validate_config, ValidationError};

/// Outcome of one polling cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No job was due; the caller should idle one quantum.
    Idle,
    /// One activation was dispatched to completion.
    Dispatched(ActivationRecord),
}

/// Periodic EDF dispatcher over one exclusive sensor bus.
///
/// Owns the fixed job table, the bus, the clock, and the pluggable job
/// body. The job set is frozen at construction; the only runtime mutation
/// of a job is its re-arm after dispatch.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use edf_dispatch::clock::ManualClock;
/// use edf_dispatch::config::DispatcherConfig;
/// use edf_dispatch::dispatch::{Dispatcher, JobBody, StepOutcome};
/// use edf_dispatch::models::BusState;
///
/// struct Body(Arc<ManualClock>);
/// impl JobBody for Body {
///     fn run(&mut self, job_id: u32, bus: &mut BusState) {
///         bus.begin_transfer(job_id);
///         self.0.advance(80_000); // 80 ms of simulated work
///         bus.complete_transfer();
///     }
/// }
///
/// let clock = Arc::new(ManualClock::new());
/// let config = DispatcherConfig::new().with_uniform_jobs(3, 200_000);
/// let mut dispatcher =
///     Dispatcher::new(&config, Arc::clone(&clock), Body(Arc::clone(&clock))).unwrap();
///
/// assert_eq!(dispatcher.step(), StepOutcome::Idle); // nothing due at t=0
/// clock.advance(200_000);
/// assert!(matches!(dispatcher.step(), StepOutcome::Dispatched(_)));
/// ```
pub struct Dispatcher<C: TimeSource, B: JobBody> {
    jobs: Vec<Job>,
    bus: SensorBus,
    clock: C,
    body: B,
    monitor: DeadlineMonitor,
    poll_quantum: Duration,
    stats: DispatchStats,
}

impl<C: TimeSource, B: JobBody> Dispatcher<C, B> {
    /// Validates `config`, arms every job's first deadline at now + period,
    /// and returns a dispatcher ready to run.
    ///
    /// # Errors
    /// All configuration problems are returned together; none of them may
    /// be ignored; the loop must not start on an invalid configuration.
    pub fn new(config: &DispatcherConfig, clock: C, body: B) -> Result<Self, Vec<ValidationError>> {
        validate_config(config)?;

        let start_us = clock.now_us();
        let jobs: Vec<Job> = config
            .jobs
            .iter()
            .map(|spec| Job::new(spec.id, spec.period_us, start_us + spec.period_us))
            .collect();

        for job in &jobs {
            info!(
                job_id = job.id(),
                first_deadline_ms = job.next_deadline_us() / 1000,
                "job armed"
            );
        }

        Ok(Self {
            jobs,
            bus: SensorBus::new(),
            clock,
            body,
            monitor: DeadlineMonitor::new(config.tolerance_us),
            poll_quantum: Duration::from_micros(config.poll_quantum_us as u64),
            stats: DispatchStats::new(),
        })
    }

    /// Runs one polling cycle without idling.
    ///
    /// If the most urgent job is due, its body runs to completion inside
    /// this call and the job is re-armed before returning.
    pub fn step(&mut self) -> StepOutcome {
        let now_us = self.clock.now_us();

        let Some(index) = earliest_deadline(&self.jobs) else {
            return StepOutcome::Idle;
        };
        if now_us < self.jobs[index].next_deadline_us() {
            return StepOutcome::Idle;
        }

        let deadline_us = self.jobs[index].next_deadline_us();
        let timeliness = self.monitor.pre_check(&self.jobs[index], now_us);

        info!(
            job_id = self.jobs[index].id(),
            at_ms = now_us / 1000,
            "execute"
        );
        let (dispatched_at_us, completed_at_us) =
            execute(&self.jobs[index], &self.bus, &mut self.body, &self.clock);

        let record = ActivationRecord {
            job_id: self.jobs[index].id(),
            deadline_us,
            dispatched_at_us,
            completed_at_us,
            timeliness,
        };
        self.monitor.post_check(&record);
        self.stats.record(&record);

        self.jobs[index].rearm();

        StepOutcome::Dispatched(record)
    }

    /// Runs the dispatch loop forever.
    ///
    /// Every cycle ends with one quantum of idle sleep, dispatched or not,
    /// mirroring the polling granularity of the configuration.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
            thread::sleep(self.poll_quantum);
        }
    }

    /// Runs the dispatch loop until `budget` of wall time has elapsed on
    /// the dispatcher's own clock.
    pub fn run_for(&mut self, budget: Duration) {
        let deadline_us = self.clock.now_us() + budget.as_micros() as i64;
        while self.clock.now_us() < deadline_us {
            self.step();
            thread::sleep(self.poll_quantum);
        }
    }

    /// The job table, in fixed configuration order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Cumulative statistics since construction.
    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }
}

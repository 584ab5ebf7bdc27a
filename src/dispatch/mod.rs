//! EDF selection, deadline monitoring, and the dispatch loop.
//!
//! # Algorithm
//!
//! [`Dispatcher`] runs a tight polling cycle: select the job with the
//! nearest absolute deadline ([`earliest_deadline`]), check whether it is
//! due, classify its lateness ([`DeadlineMonitor`]), run its body to
//! completion under the bus lock ([`execute`]), then advance its deadline
//! by exactly one period. Sequential and non-preemptive by design.
//!
//! # Reference
//! Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//! Hard-Real-Time Environment"

mod dispatcher;
mod executor;
mod monitor;
mod selector;
mod stats;

pub use dispatcher::{Dispatcher, StepOutcome};
pub use executor::{execute, JobBody, SimulatedTransfer};
pub use monitor::{classify, ActivationRecord, DeadlineMonitor, Timeliness};
pub use selector::earliest_deadline;
pub use stats::{DispatchStats, JobStats};

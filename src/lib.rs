//! Earliest-deadline-first dispatcher for periodic jobs sharing one
//! exclusive bus.
//!
//! A single control flow cyclically executes a fixed set of periodic jobs,
//! always picking the one with the nearest absolute deadline, running it to
//! completion while holding the shared sensor bus, and classifying every
//! activation as on-time or missed against a lateness tolerance. Misses are
//! observations, never control flow: a late job still runs, and its deadline
//! still advances by exactly one period.
//!
//! # Modules
//!
//! - **`models`**: Domain types — [`Job`](models::Job),
//!   [`SensorBus`](models::SensorBus)
//! - **`clock`**: Monotonic time sources ([`TimeSource`](clock::TimeSource))
//! - **`config`**: Startup configuration
//!   ([`DispatcherConfig`](config::DispatcherConfig))
//! - **`validation`**: Configuration integrity checks
//! - **`dispatch`**: EDF selection, deadline monitoring, and the dispatch
//!   loop ([`Dispatcher`](dispatch::Dispatcher))
//!
//! # Scheduling model
//!
//! Dispatch is non-preemptive and run-to-completion: the loop does not
//! evaluate any other job's deadline while a body executes, so one
//! overrunning job delays everyone behind it. Re-arm is rate-based: each
//! dispatch advances the deadline from its old value, never from completion
//! time, so sustained overrun makes deadlines drift behind the clock
//! instead of resynchronizing.
//!
//! # References
//!
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"
//! - Buttazzo (2011), "Hard Real-Time Computing Systems", Ch. 4 (EDF)

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod models;
pub mod validation;

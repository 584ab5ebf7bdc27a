//! Dispatcher domain models.
//!
//! The two runtime entities of the core: the periodic [`Job`] record and the
//! exclusive [`SensorBus`] every job body transfers over. Both are owned by
//! the dispatch loop; there is no ambient global state.

mod bus;
mod job;

pub use bus::{BusGuard, BusState, SensorBus};
pub use job::Job;

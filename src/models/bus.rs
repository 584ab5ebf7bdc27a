//! Shared sensor bus with exclusive ownership.
//!
//! All jobs transfer over one bus, so a transfer must hold the bus lock for
//! its whole duration. [`SensorBus::acquire`] blocks until ownership is
//! granted and returns a guard; release happens when the guard drops, on
//! every exit path including unwinding. Mutual exclusion is the only
//! guarantee: there is no fairness or bounded waiting, which is precisely
//! what turns contention into lateness upstream.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// Observable state of the bus, driven by the owning job's transfer.
#[derive(Debug, Default)]
pub struct BusState {
    transfers_completed: u64,
    current_owner: Option<u32>,
    last_owner: Option<u32>,
}

impl BusState {
    /// Marks the start of a transfer by `job_id`.
    ///
    /// The bus is not reentrant: a transfer must not already be in flight.
    pub fn begin_transfer(&mut self, job_id: u32) {
        debug_assert!(self.current_owner.is_none());
        self.current_owner = Some(job_id);
    }

    /// Marks the end of the in-flight transfer.
    pub fn complete_transfer(&mut self) {
        if let Some(owner) = self.current_owner.take() {
            self.last_owner = Some(owner);
            self.transfers_completed += 1;
        }
    }

    /// Number of transfers completed over the bus lifetime.
    pub fn transfers_completed(&self) -> u64 {
        self.transfers_completed
    }

    /// Job currently driving the bus, if a transfer is in flight.
    pub fn current_owner(&self) -> Option<u32> {
        self.current_owner
    }

    /// Job that drove the most recently completed transfer.
    pub fn last_owner(&self) -> Option<u32> {
        self.last_owner
    }
}

/// The exclusive shared resource contended for by every job body.
#[derive(Debug, Default)]
pub struct SensorBus {
    state: Mutex<BusState>,
}

impl SensorBus {
    /// Creates an idle bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the bus is free, then takes exclusive ownership.
    ///
    /// A body that panics mid-transfer poisons the mutex; the state is
    /// recovered rather than propagated, and the torn transfer is aborted
    /// so the next owner finds the bus idle.
    pub fn acquire(&self) -> BusGuard<'_> {
        let guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let mut guard = poisoned.into_inner();
                guard.current_owner = None;
                guard
            }
        };
        BusGuard { guard }
    }
}

/// Exclusive ownership of the bus; dropping it releases the bus and wakes
/// at most one waiter.
pub struct BusGuard<'a> {
    guard: MutexGuard<'a, BusState>,
}

impl Deref for BusGuard<'_> {
    type Target = BusState;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl DerefMut for BusGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

//! Earliest-deadline-first selection.
//!
//! # Score Convention
//! Lower absolute deadline = more urgent. Ties are broken by the lowest
//! index in the job table, so selection is deterministic and repeated calls
//! without a deadline change return the same job.
//!
//! # Reference
//! Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//! Hard-Real-Time Environment"

use crate::models::Job;

/// Returns the index of the job with the numerically smallest deadline.
///
/// Pure and side-effect free. `None` only for an empty slice; validation
/// guarantees the dispatcher never holds an empty job table.
pub fn earliest_deadline(jobs: &[Job]) -> Option<usize> {
    // min_by_key keeps the first minimum, which is the required stable
    // lowest-index tie-break.
    jobs.iter()
        .enumerate()
        .min_by_key(|(_, job)| job.next_deadline_us())
        .map(|(index, _)| index)
}

//! Job model.
//!
//! A job is the unit of work submitted for sequencing: it occupies exactly
//! one slot for one unit of time, must be seated at or before its deadline
//! slot, and yields its full profit iff it is seated.
//!
//! # Reference
//! Horowitz, Sahni & Rajasekaran (1998), "Computer Algorithms", Ch. 4
//! (Job Sequencing with Deadlines)

use serde::{Deserialize, Serialize};

/// A submitted job.
///
/// Immutable once accepted: the registry never edits a stored record.
/// Slot positions and deadlines are 1-based; a deadline of `d` means the
/// job may sit in any slot of `[1, d]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Latest slot index (inclusive) this job may occupy.
    pub deadline: usize,
    /// Profit collected if the job is seated in any feasible slot.
    pub profit: u64,
}

impl Job {
    /// Creates a new job record.
    pub fn new(id: impl Into<String>, deadline: usize, profit: u64) -> Self {
        Self {
            id: id.into(),
            deadline,
            profit,
        }
    }

    /// Whether this job may legally occupy the given 1-based slot.
    #[inline]
    pub fn fits_slot(&self, slot: usize) -> bool {
        slot >= 1 && slot <= self.deadline
    }

    /// The last slot the assignment scan may try on a board of
    /// `slot_count` slots: `min(deadline, slot_count)`.
    #[inline]
    pub fn latest_slot(&self, slot_count: usize) -> usize {
        self.deadline.min(slot_count)
    }
}

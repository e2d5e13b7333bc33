//! Submission error types.
//!
//! Every failure is a user-correctable input condition reported
//! synchronously to the caller; nothing here is fatal and no operation
//! leaves partial state behind.

use thiserror::Error;

/// Errors that can occur when submitting a job.
///
/// The `Display` text is suitable for showing to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Empty id, or a non-numeric / non-positive deadline or profit.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No empty slot remains anywhere on the board.
    #[error("all {slot_count} slots are already filled")]
    SlotsFull { slot_count: usize },

    /// The requested deadline lies beyond the last slot.
    #[error("deadline {deadline} cannot exceed the slot count {slot_count}")]
    DeadlineExceeded { deadline: usize, slot_count: usize },

    /// A job with this id was already submitted.
    #[error("job '{0}' already exists")]
    DuplicateJob(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

//! Raw-text submission boundary.
//!
//! The presentation layer collects three free-text fields. This module
//! carries the syntax gate that runs before any scheduling gate: trim all
//! fields, require a non-empty id and digit-only numbers, and only then
//! hand typed values to the scheduler. Positivity is deliberately not
//! checked here — `"0"` passes the syntax gate and is rejected by the
//! scheduler's positivity gate, keeping the observable gate order of the
//! reference form handler.

use crate::error::{ScheduleError, ScheduleResult};

/// One raw submission as typed by the user: id, deadline, profit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    /// Job id field, untrimmed.
    pub id: String,
    /// Deadline field, untrimmed.
    pub deadline: String,
    /// Profit field, untrimmed.
    pub profit: String,
}

impl SubmissionForm {
    /// Creates a form from the three raw field values.
    pub fn new(
        id: impl Into<String>,
        deadline: impl Into<String>,
        profit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            deadline: deadline.into(),
            profit: profit.into(),
        }
    }

    /// Trims and parses the form into typed submission arguments.
    ///
    /// Fails with [`ScheduleError::InvalidInput`] when the trimmed id is
    /// empty or either numeric field is not a plain run of ASCII digits.
    /// Signs, decimal points, and empty fields all fail; leading zeros
    /// and `"0"` itself parse (positivity is a later gate).
    pub fn parse(&self) -> ScheduleResult<(String, usize, u64)> {
        let id = self.id.trim();
        let deadline = self.deadline.trim();
        let profit = self.profit.trim();

        if id.is_empty() || !is_digits(deadline) || !is_digits(profit) {
            return Err(ScheduleError::InvalidInput(
                "enter a job id and numeric deadline and profit".into(),
            ));
        }

        let deadline: usize = deadline
            .parse()
            .map_err(|_| ScheduleError::InvalidInput(format!("deadline '{deadline}' is too large")))?;
        let profit: u64 = profit
            .parse()
            .map_err(|_| ScheduleError::InvalidInput(format!("profit '{profit}' is too large")))?;

        Ok((id.to_string(), deadline, profit))
    }
}

/// Non-empty run of ASCII digits.
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

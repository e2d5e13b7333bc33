//! Job registry.
//!
//! Insertion-ordered store of every accepted job. Ids are unique; records
//! are immutable and never removed — releasing a slot clears the seat, not
//! the registry entry, so a released job stays known and can be seated
//! again by a later reassignment round.
//!
//! Insertion order is observable: the profit-descending sort breaks ties
//! by it.

use serde::{Deserialize, Serialize};

use crate::models::Job;

/// The set of submitted jobs, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRegistry {
    jobs: Vec<Job>,
}

impl JobRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job has been registered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Whether a job with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Looks up a job by id.
    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Iterates jobs in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    /// Appends an accepted job.
    ///
    /// The submission gates have already rejected duplicates; this only
    /// records.
    pub(crate) fn insert(&mut self, job: Job) {
        self.jobs.push(job);
    }
}

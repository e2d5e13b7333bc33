//! Profit-greedy slot scheduler.
//!
//! # Algorithm
//!
//! One reassignment round, run after every accepted submission:
//! 1. Order all registered jobs by profit, descending. The sort is stable,
//!    so equal profits keep submission order.
//! 2. Jobs already seated keep their seats.
//! 3. Each remaining job takes the latest empty slot in `[1, deadline]`,
//!    scanning downward. If that range is full, the job stays unseated
//!    until a later round.
//!
//! Rounds build on the current occupancy and never evict: a seated job
//! keeps its slot even when a later, higher-profit arrival would have
//! preferred it. The resulting assignment depends on submission order,
//! not only on the final job set.
//!
//! # Complexity
//! O(n log n + n * S) per round, for n registered jobs and S slots.
//!
//! # Reference
//! Horowitz, Sahni & Rajasekaran (1998), "Computer Algorithms", Ch. 4
//! (Job Sequencing with Deadlines)

use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};
use crate::intake::SubmissionForm;
use crate::models::{BoardView, Job, SlotBoard};
use crate::registry::JobRegistry;

/// Slot count of the reference configuration.
pub const DEFAULT_SLOT_COUNT: usize = 5;

/// The scheduling state object: job registry plus slot board.
///
/// All mutation goes through [`submit`](Self::submit),
/// [`reassign`](Self::reassign), and [`release`](Self::release); each call
/// completes before the next begins and there is no background work, so a
/// single owner drives the whole lifecycle.
///
/// # Example
///
/// ```
/// use slotboard::scheduler::SlotScheduler;
///
/// let mut scheduler = SlotScheduler::default(); // 5 slots
/// scheduler.submit("J1", 2, 100).unwrap();
/// scheduler.submit("J2", 2, 10).unwrap();
///
/// let view = scheduler.snapshot();
/// assert_eq!(view.slot(2).map(|j| j.id.as_str()), Some("J1"));
/// assert_eq!(view.slot(1).map(|j| j.id.as_str()), Some("J2"));
/// assert_eq!(view.total_profit, 110);
/// ```
#[derive(Debug, Clone)]
pub struct SlotScheduler {
    registry: JobRegistry,
    board: SlotBoard,
}

impl SlotScheduler {
    /// Creates a scheduler with `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            registry: JobRegistry::new(),
            board: SlotBoard::new(slot_count),
        }
    }

    /// Number of slots on the board.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.board.slot_count()
    }

    /// The registry of all accepted jobs.
    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// The current slot occupancy.
    pub fn board(&self) -> &SlotBoard {
        &self.board
    }

    /// Submits a job and, on acceptance, runs one reassignment round.
    ///
    /// Validation gates, in order:
    /// 1. `id` must be non-empty.
    /// 2. The board must have at least one empty slot. This gate precedes
    ///    the range checks: a full board rejects even an out-of-range
    ///    deadline as [`ScheduleError::SlotsFull`].
    /// 3. `deadline` must not exceed the slot count.
    /// 4. `deadline` and `profit` must be positive.
    /// 5. `id` must not already be registered.
    ///
    /// A rejected submission changes nothing; an accepted one inserts the
    /// record, reassigns, and returns a clone of the stored job.
    pub fn submit(&mut self, id: &str, deadline: usize, profit: u64) -> ScheduleResult<Job> {
        if id.is_empty() {
            return Err(ScheduleError::InvalidInput(
                "job id must not be empty".into(),
            ));
        }
        if self.board.is_full() {
            return Err(ScheduleError::SlotsFull {
                slot_count: self.slot_count(),
            });
        }
        if deadline > self.slot_count() {
            return Err(ScheduleError::DeadlineExceeded {
                deadline,
                slot_count: self.slot_count(),
            });
        }
        if deadline == 0 || profit == 0 {
            return Err(ScheduleError::InvalidInput(
                "deadline and profit must be positive".into(),
            ));
        }
        if self.registry.contains(id) {
            return Err(ScheduleError::DuplicateJob(id.to_string()));
        }

        let job = Job::new(id, deadline, profit);
        self.registry.insert(job.clone());
        debug!(id = %job.id, deadline, profit, "job accepted");
        self.run_round();
        Ok(job)
    }

    /// Submits from a raw-text form (see [`SubmissionForm`]).
    ///
    /// The form's syntax gate runs first, then the gates of
    /// [`submit`](Self::submit), reproducing the end-to-end order
    /// syntax, slots-full, deadline range, positivity, duplicate.
    pub fn submit_form(&mut self, form: &SubmissionForm) -> ScheduleResult<Job> {
        let (id, deadline, profit) = form.parse()?;
        self.submit(&id, deadline, profit)
    }

    /// Runs one reassignment round and returns the resulting view.
    ///
    /// Rounds are idempotent: with no intervening submit or release, a
    /// second call changes nothing.
    pub fn reassign(&mut self) -> BoardView {
        self.run_round();
        self.snapshot()
    }

    /// Clears the given 1-based slot, returning the job that sat there.
    ///
    /// No reassignment runs. The job's record stays in the registry, so
    /// the next round (triggered by a later submission or an explicit
    /// [`reassign`](Self::reassign)) considers it again. Returns `None`
    /// for an out-of-range index or an already-empty slot.
    pub fn release(&mut self, slot: usize) -> Option<Job> {
        let id = self.board.clear(slot)?;
        debug!(slot, id = %id, "slot released");
        self.registry.get(&id).cloned()
    }

    /// The current assignment and total profit, for presentation.
    pub fn snapshot(&self) -> BoardView {
        let slots = (1..=self.slot_count())
            .map(|slot| {
                self.board
                    .seated_id(slot)
                    .and_then(|id| self.registry.get(id))
                    .cloned()
            })
            .collect();
        BoardView::new(slots, self.total_profit())
    }

    /// Sum of profits over all seated jobs, recomputed on every call.
    pub fn total_profit(&self) -> u64 {
        self.board
            .seated()
            .filter_map(|(_, id)| self.registry.get(id))
            .map(|j| j.profit)
            .sum()
    }

    /// One greedy pass over the registry on top of current occupancy.
    fn run_round(&mut self) {
        let Self { registry, board } = self;

        let mut order: Vec<&Job> = registry.iter().collect();
        // Stable sort: equal profits stay in submission order.
        order.sort_by(|a, b| b.profit.cmp(&a.profit));

        for job in order {
            if board.contains(&job.id) {
                continue; // Already seated, keeps its slot
            }
            if let Some(slot) = board.latest_open_slot(job.latest_slot(board.slot_count())) {
                board.seat(slot, job.id.as_str());
            }
        }

        debug!(
            seated = self.board.seated_count(),
            total_profit = self.total_profit(),
            "reassignment round complete"
        );
    }
}

impl Default for SlotScheduler {
    /// A scheduler with [`DEFAULT_SLOT_COUNT`] slots, the reference setup.
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five jobs with deadline 5 fill every slot of a default board.
    fn full_scheduler() -> SlotScheduler {
        let mut s = SlotScheduler::default();
        for i in 1..=5 {
            s.submit(&format!("J{i}"), 5, 10 * i as u64).unwrap();
        }
        assert!(s.board().is_full());
        s
    }

    #[test]
    fn test_submit_seats_latest_feasible_slot() {
        let mut s = SlotScheduler::default();
        s.submit("J1", 2, 100).unwrap();

        assert_eq!(s.registry().len(), 1);
        assert_eq!(s.board().slot_of("J1"), Some(2));
        assert_eq!(s.total_profit(), 100);
    }

    #[test]
    fn test_higher_profit_takes_later_slot() {
        // Scenario: equal deadlines, the richer job claims slot 2 and the
        // other falls back to slot 1.
        let mut s = SlotScheduler::default();
        s.submit("J1", 2, 100).unwrap();
        s.submit("J2", 2, 10).unwrap();

        assert_eq!(s.board().slot_of("J1"), Some(2));
        assert_eq!(s.board().slot_of("J2"), Some(1));
        assert_eq!(s.total_profit(), 110);
    }

    #[test]
    fn test_duplicate_id_rejected_without_mutation() {
        let mut s = SlotScheduler::default();
        s.submit("J1", 1, 20).unwrap();
        let before = s.snapshot();

        let err = s.submit("J1", 1, 5).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateJob("J1".into()));
        assert_eq!(s.registry().len(), 1);
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn test_full_board_rejects_regardless_of_validity() {
        let mut s = full_scheduler();

        // A well-formed sixth job.
        let err = s.submit("J6", 5, 999).unwrap_err();
        assert_eq!(err, ScheduleError::SlotsFull { slot_count: 5 });

        // An out-of-range deadline still reports SlotsFull: the occupancy
        // gate precedes the range checks.
        let err = s.submit("J7", 99, 1).unwrap_err();
        assert_eq!(err, ScheduleError::SlotsFull { slot_count: 5 });

        // The empty-id gate runs even earlier.
        let err = s.submit("", 5, 10).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput(_)));

        assert_eq!(s.registry().len(), 5);
    }

    #[test]
    fn test_deadline_beyond_board_rejected() {
        let mut s = SlotScheduler::default();
        let err = s.submit("J1", 6, 50).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::DeadlineExceeded {
                deadline: 6,
                slot_count: 5
            }
        );
        assert!(s.registry().is_empty());
        assert_eq!(s.board().seated_count(), 0);
    }

    #[test]
    fn test_zero_deadline_or_profit_rejected() {
        let mut s = SlotScheduler::default();
        assert!(matches!(
            s.submit("J1", 0, 10),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(matches!(
            s.submit("J1", 3, 0),
            Err(ScheduleError::InvalidInput(_))
        ));
        assert!(s.registry().is_empty());
    }

    #[test]
    fn test_unseatable_job_stays_registered() {
        let mut s = SlotScheduler::default();
        s.submit("J1", 1, 100).unwrap();
        s.submit("J2", 1, 50).unwrap(); // Slot 1 already taken

        assert_eq!(s.board().slot_of("J1"), Some(1));
        assert_eq!(s.board().slot_of("J2"), None);
        assert_eq!(s.registry().len(), 2);
        assert_eq!(s.total_profit(), 100);
    }

    #[test]
    fn test_no_eviction_keeps_history_dependent_assignment() {
        let mut s = SlotScheduler::new(2);
        s.submit("A", 2, 10).unwrap(); // Takes slot 2
        s.submit("B", 2, 100).unwrap(); // Slot 2 taken, falls to slot 1
        s.submit("C", 1, 50).unwrap_err(); // Board full: SlotsFull

        // A from-scratch pass over {A, B, C} would seat B and C for 150;
        // the incremental rounds keep A and B for 110.
        assert_eq!(s.board().slot_of("A"), Some(2));
        assert_eq!(s.board().slot_of("B"), Some(1));
        assert_eq!(s.total_profit(), 110);
    }

    #[test]
    fn test_profit_tie_breaks_by_submission_order() {
        let mut s = SlotScheduler::default();
        s.submit("first", 3, 70).unwrap(); // Takes slot 3
        s.release(3).unwrap();
        s.submit("second", 3, 70).unwrap();

        // The round re-seats both; "first" wins the later slot on the tie.
        assert_eq!(s.board().slot_of("first"), Some(3));
        assert_eq!(s.board().slot_of("second"), Some(2));
    }

    #[test]
    fn test_release_clears_without_reassigning() {
        let mut s = SlotScheduler::default();
        s.submit("A", 5, 50).unwrap(); // Slot 5
        s.submit("B", 5, 40).unwrap(); // Slot 4
        s.submit("C", 5, 30).unwrap(); // Slot 3
        assert_eq!(s.total_profit(), 120);

        let released = s.release(3).unwrap();
        assert_eq!(released.id, "C");
        assert_eq!(s.board().seated_id(3), None);
        assert_eq!(s.total_profit(), 90); // Drops by C's profit immediately

        // No round ran: C is unseated but still registered.
        assert_eq!(s.board().slot_of("C"), None);
        assert!(s.registry().contains("C"));

        // Resubmitting the released id still collides with the registry.
        let err = s.submit("C", 5, 30).unwrap_err();
        assert_eq!(err, ScheduleError::DuplicateJob("C".into()));
    }

    #[test]
    fn test_release_invalid_or_empty_slot() {
        let mut s = SlotScheduler::default();
        s.submit("A", 1, 10).unwrap();

        assert!(s.release(2).is_none()); // Empty slot
        assert!(s.release(0).is_none()); // No slot 0
        assert!(s.release(9).is_none()); // Out of range
        assert_eq!(s.board().slot_of("A"), Some(1)); // Untouched
    }

    #[test]
    fn test_released_job_reconsidered_next_round() {
        let mut s = SlotScheduler::default();
        s.submit("A", 5, 50).unwrap();
        s.submit("B", 5, 40).unwrap();
        s.submit("C", 5, 30).unwrap();
        s.release(3).unwrap(); // C unseated

        // The next submission triggers a round over the whole registry:
        // C (profit 30) reclaims slot 3 before D (profit 10) is placed.
        s.submit("D", 3, 10).unwrap();
        assert_eq!(s.board().slot_of("C"), Some(3));
        assert_eq!(s.board().slot_of("D"), Some(2));
        assert_eq!(s.total_profit(), 130);
    }

    #[test]
    fn test_explicit_reassign_after_release() {
        let mut s = SlotScheduler::default();
        s.submit("A", 2, 100).unwrap();
        s.release(2).unwrap();
        assert_eq!(s.total_profit(), 0);

        let view = s.reassign();
        assert_eq!(view.slot(2).map(|j| j.id.as_str()), Some("A"));
        assert_eq!(view.total_profit, 100);
    }

    #[test]
    fn test_reassign_is_idempotent() {
        let mut s = SlotScheduler::default();
        s.submit("A", 3, 30).unwrap();
        s.submit("B", 2, 80).unwrap();
        s.submit("C", 5, 5).unwrap();
        s.release(2).unwrap();

        let first = s.reassign();
        let second = s.reassign();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seated_deadlines_always_feasible() {
        let mut s = SlotScheduler::default();
        s.submit("A", 3, 25).unwrap();
        s.submit("B", 1, 90).unwrap();
        s.submit("C", 3, 40).unwrap();
        s.release(3).unwrap();
        s.submit("D", 5, 15).unwrap();
        // E registers fine but finds [1, 2] occupied and stays unseated.
        s.submit("E", 2, 60).unwrap();

        let mut seen = Vec::new();
        for (slot, id) in s.board().seated() {
            let job = s.registry().get(id).expect("seated id is registered");
            assert!(job.fits_slot(slot), "{id} seated past its deadline");
            assert!(!seen.contains(&id), "{id} seated twice");
            seen.push(id);
        }
    }

    #[test]
    fn test_snapshot_matches_board_state() {
        let mut s = SlotScheduler::default();
        s.submit("A", 4, 45).unwrap();
        s.submit("B", 4, 55).unwrap();

        let view = s.snapshot();
        assert_eq!(view.slot_count(), 5);
        assert_eq!(view.seated_count(), 2);
        // A claimed slot 4 first; B, though richer, falls back to slot 3.
        assert_eq!(view.slot(4).map(|j| j.id.as_str()), Some("A"));
        assert_eq!(view.slot(3).map(|j| j.id.as_str()), Some("B"));
        assert_eq!(view.total_profit, 100);
    }

    #[test]
    fn test_default_uses_reference_slot_count() {
        let s = SlotScheduler::default();
        assert_eq!(s.slot_count(), DEFAULT_SLOT_COUNT);
        assert_eq!(s.slot_count(), 5);
    }

    #[test]
    fn test_submit_form_end_to_end_gate_order() {
        let mut s = full_scheduler();

        // Syntax gate fires before the occupancy gate, as in the original
        // form handler.
        let junk = SubmissionForm::new("J9", "soon", "100");
        assert!(matches!(
            s.submit_form(&junk).unwrap_err(),
            ScheduleError::InvalidInput(_)
        ));

        // Well-formed digits on a full board: occupancy gate wins over the
        // range check.
        let over = SubmissionForm::new("J9", "99", "100");
        assert_eq!(
            s.submit_form(&over).unwrap_err(),
            ScheduleError::SlotsFull { slot_count: 5 }
        );
    }

    #[test]
    fn test_submit_form_trims_and_seats() {
        let mut s = SlotScheduler::default();
        let form = SubmissionForm::new(" J1 ", " 2 ", " 100 ");
        let job = s.submit_form(&form).unwrap();

        assert_eq!(job.id, "J1");
        assert_eq!(s.board().slot_of("J1"), Some(2));
    }
}

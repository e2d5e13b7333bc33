//! Slot board (assignment state) and presentation view.
//!
//! The board is an ordered row of `S` slots, 1-indexed, each either empty
//! or holding the id of a seated job. Slots hold ids, never job records:
//! the registry owns every `Job`, and seating is a non-owning reference
//! resolved by id.
//!
//! # Invariants
//! - A given job id appears in at most one slot at any time.
//! - Slot indices run `1..=slot_count`; index 0 does not exist.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! (scheduling unit-time tasks with deadlines)

use serde::{Deserialize, Serialize};

use super::Job;

/// Occupancy state of the slot row.
///
/// Mutation is reserved to the scheduler (seat/clear); external callers
/// read occupancy and derive views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBoard {
    /// `slots[i]` holds slot `i + 1`.
    slots: Vec<Option<String>>,
}

impl SlotBoard {
    /// Creates a board of `slot_count` empty slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Number of slots on the board.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The id seated in the given 1-based slot.
    ///
    /// Returns `None` for an empty slot or an out-of-range index.
    pub fn seated_id(&self, slot: usize) -> Option<&str> {
        if slot == 0 {
            return None;
        }
        self.slots.get(slot - 1)?.as_deref()
    }

    /// Whether the given job id is currently seated anywhere.
    pub fn contains(&self, id: &str) -> bool {
        self.slot_of(id).is_some()
    }

    /// The 1-based slot currently holding `id`, if any.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_deref() == Some(id))
            .map(|i| i + 1)
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Number of occupied slots.
    pub fn seated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of empty slots.
    pub fn open_count(&self) -> usize {
        self.slot_count() - self.seated_count()
    }

    /// Iterates occupied slots as `(slot, id)` pairs in slot order.
    pub fn seated(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|id| (i + 1, id)))
    }

    /// The latest empty slot in `[1, at_or_before]`, scanning downward.
    ///
    /// This is the placement scan of greedy deadline sequencing: the
    /// highest-profit job takes the latest slot it still fits, leaving
    /// earlier slots for tighter deadlines. `at_or_before` values beyond
    /// the board are clamped.
    pub fn latest_open_slot(&self, at_or_before: usize) -> Option<usize> {
        let from = at_or_before.min(self.slot_count());
        (1..=from).rev().find(|&slot| self.slots[slot - 1].is_none())
    }

    /// Seats `id` in the given 1-based slot.
    ///
    /// Callers seat only into slots the placement scan reported open, and
    /// only ids not currently seated elsewhere.
    pub(crate) fn seat(&mut self, slot: usize, id: impl Into<String>) {
        self.slots[slot - 1] = Some(id.into());
    }

    /// Clears the given 1-based slot, returning the id that was seated.
    ///
    /// Returns `None` (and changes nothing) for an out-of-range index or
    /// an already-empty slot.
    pub(crate) fn clear(&mut self, slot: usize) -> Option<String> {
        if slot == 0 || slot > self.slot_count() {
            return None;
        }
        self.slots[slot - 1].take()
    }
}

/// Snapshot of the board handed to the presentation layer.
///
/// Each occupied slot carries a clone of the seated job so the renderer
/// can draw id, profit, and deadline without registry access. Serializes
/// to JSON for out-of-process presenters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// `slots[i]` is slot `i + 1`; `None` renders as an empty slot.
    pub slots: Vec<Option<Job>>,
    /// Sum of profits over all seated jobs, recomputed at snapshot time.
    pub total_profit: u64,
}

impl BoardView {
    /// Creates a view from per-slot job clones and the recomputed total.
    pub fn new(slots: Vec<Option<Job>>, total_profit: u64) -> Self {
        Self {
            slots,
            total_profit,
        }
    }

    /// Number of slots in the view.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The job shown in the given 1-based slot, if any.
    pub fn slot(&self, slot: usize) -> Option<&Job> {
        if slot == 0 {
            return None;
        }
        self.slots.get(slot - 1)?.as_ref()
    }

    /// Number of occupied slots in the view.
    pub fn seated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

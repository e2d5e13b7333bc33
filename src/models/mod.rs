//! Sequencing domain models.
//!
//! Core data types for the deadline-sequencing problem and its solution
//! state: the submitted [`Job`], the [`SlotBoard`] occupancy row, and the
//! [`BoardView`] snapshot handed to presentation.
//!
//! Ownership is one-directional: the registry owns job records, the board
//! references them by id, and views carry clones cut for rendering.

mod board;
mod job;

pub use board::{BoardView, SlotBoard};
pub use job::Job;

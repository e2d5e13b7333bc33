//! Incremental job sequencing with deadlines.
//!
//! Assigns user-submitted jobs — each with a deadline and a profit — into a
//! fixed row of discrete time slots to maximize collected profit, following
//! the classical greedy strategy. Jobs arrive one at a time; each accepted
//! submission triggers a reassignment round over all known jobs on top of
//! the existing occupancy. Rendering, input forms, and click-to-delete UI
//! belong to an external collaborator that feeds this core and redraws from
//! its board views.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `SlotBoard`, `BoardView`
//! - **`registry`**: Insertion-ordered, duplicate-rejecting job store
//! - **`scheduler`**: The greedy `SlotScheduler` and `BoardKpi` metrics
//! - **`intake`**: Raw-text form parsing ahead of the typed API
//! - **`palette`**: Presentation-side per-job color cycling
//! - **`error`**: User-correctable submission errors
//!
//! # Architecture
//!
//! A single injectable state object (`SlotScheduler`) owns the registry and
//! the board; every operation is synchronous and atomic, with no background
//! work. Seated jobs are never evicted by later arrivals, so the assignment
//! is history-dependent by design, not globally optimal over arrival orders.
//!
//! # References
//!
//! - Horowitz, Sahni & Rajasekaran (1998), "Computer Algorithms", Ch. 4
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod error;
pub mod intake;
pub mod models;
pub mod palette;
pub mod registry;
pub mod scheduler;

pub use error::{ScheduleError, ScheduleResult};
pub use intake::SubmissionForm;
pub use models::{BoardView, Job, SlotBoard};
pub use palette::PaletteCycle;
pub use registry::JobRegistry;
pub use scheduler::{BoardKpi, SlotScheduler, DEFAULT_SLOT_COUNT};

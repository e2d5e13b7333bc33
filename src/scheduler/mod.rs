//! Greedy slot scheduler and board KPIs.
//!
//! Provides the profit-greedy deadline scheduler and board quality metrics.
//!
//! # Algorithm
//!
//! `SlotScheduler` runs the classical job-sequencing-with-deadlines greedy
//! incrementally: after every accepted submission it passes over the whole
//! registry in profit-descending order and seats each unseated job in the
//! latest open slot at or before its deadline. Seated jobs are never
//! evicted, so the assignment is history-dependent rather than globally
//! optimal over arrival orders.
//!
//! # KPI
//!
//! `BoardKpi` computes occupancy metrics: total profit, seated and open
//! counts, fill rate, and the unseated backlog.
//!
//! # References
//!
//! - Horowitz, Sahni & Rajasekaran (1998), "Computer Algorithms", Ch. 4
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.5

mod greedy;
mod kpi;

pub use greedy::{SlotScheduler, DEFAULT_SLOT_COUNT};
pub use kpi::BoardKpi;

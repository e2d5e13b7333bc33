//! Board occupancy metrics (KPIs).
//!
//! Derived read-only from the registry and the board; recomputed on every
//! call, never cached.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Profit | Sum of profits over seated jobs |
//! | Seated / Open | Occupied and empty slot counts |
//! | Fill Rate | seated / slot_count |
//! | Unseated | Registered jobs currently without a seat |

use crate::models::SlotBoard;
use crate::registry::JobRegistry;

/// Occupancy and profit indicators for one board state.
#[derive(Debug, Clone)]
pub struct BoardKpi {
    /// Sum of profits over all seated jobs.
    pub total_profit: u64,
    /// Number of occupied slots.
    pub seated_count: usize,
    /// Number of empty slots.
    pub open_count: usize,
    /// Fraction of slots occupied (0.0..1.0).
    pub fill_rate: f64,
    /// Ids of registered jobs without a seat, in submission order.
    pub unseated: Vec<String>,
}

impl BoardKpi {
    /// Computes the indicators for the given registry and board.
    pub fn calculate(registry: &JobRegistry, board: &SlotBoard) -> Self {
        let total_profit = board
            .seated()
            .filter_map(|(_, id)| registry.get(id))
            .map(|j| j.profit)
            .sum();

        let seated_count = board.seated_count();
        let slot_count = board.slot_count();
        let fill_rate = if slot_count == 0 {
            0.0
        } else {
            seated_count as f64 / slot_count as f64
        };

        let unseated = registry
            .iter()
            .filter(|j| !board.contains(&j.id))
            .map(|j| j.id.clone())
            .collect();

        Self {
            total_profit,
            seated_count,
            open_count: board.open_count(),
            fill_rate,
            unseated,
        }
    }
}

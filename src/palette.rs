//! Per-job color assignment for presentation.
//!
//! Owned by the rendering collaborator, not the scheduling core: slot
//! contents carry no color, and the scheduler never sees this table. The
//! cycle hands the next palette color to each id on first appearance and
//! wraps modulo the palette length, so a job keeps one stable color for
//! the lifetime of the cycle.

use std::collections::HashMap;

/// Default pastel palette of the reference renderer, in cycling order.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#FFB3BA", "#BAE1FF", "#BAFFC9", "#FFFFBA", "#FFDFBA", "#D7BAFF", "#BAFFD9", "#FFC2E2",
    "#B9E0FF", "#BAFFC9",
];

/// First-seen, palette-cycling color table keyed by job id.
#[derive(Debug, Clone)]
pub struct PaletteCycle {
    colors: Vec<String>,
    assigned: HashMap<String, usize>,
}

impl PaletteCycle {
    /// Creates a cycle over [`DEFAULT_PALETTE`].
    pub fn new() -> Self {
        Self::with_colors(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }

    /// Creates a cycle over a custom, non-empty color list.
    pub fn with_colors(colors: Vec<String>) -> Self {
        assert!(!colors.is_empty(), "palette must have at least one color");
        Self {
            colors,
            assigned: HashMap::new(),
        }
    }

    /// Number of colors before the cycle wraps.
    #[inline]
    pub fn palette_len(&self) -> usize {
        self.colors.len()
    }

    /// The color for `id`, assigning the next palette color on first sight.
    pub fn color_for(&mut self, id: &str) -> &str {
        let next = self.assigned.len() % self.colors.len();
        let index = *self
            .assigned
            .entry(id.to_string())
            .or_insert(next);
        &self.colors[index]
    }

    /// The color already assigned to `id`, if it has appeared before.
    pub fn existing_color(&self, id: &str) -> Option<&str> {
        self.assigned.get(id).map(|&i| self.colors[i].as_str())
    }
}

impl Default for PaletteCycle {
    fn default() -> Self {
        Self::new()
    }
}

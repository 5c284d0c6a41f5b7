//! Combination counts and coverage of a range.

use serde::{Deserialize, Serialize};

use super::grid::HandGrid;
use super::hand::{ShorthandHand, Suitedness, TOTAL_COMBOS};

/// Summary statistics of a grid. Only active cells (selected with a
/// non-zero weight) are counted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    /// Number of active hands.
    pub selected_hands: usize,
    /// Combos of the active hands, ignoring weights.
    pub selected_combos: u32,
    /// Combos of the active hands scaled by their weights.
    pub weighted_combos: f64,
    /// Always 1326.
    pub total_combos: u32,
    /// `selected_combos` as a percentage of all combos.
    pub percentage: f64,
    /// `weighted_combos` as a percentage of all combos.
    pub weighted_percentage: f64,
    /// Active pairs.
    pub pairs: usize,
    /// Active suited hands.
    pub suited: usize,
    /// Active offsuit hands.
    pub offsuit: usize,
}

impl RangeStats {
    /// Compute statistics for a grid.
    pub fn from_grid<G: HandGrid>(grid: &G) -> Self {
        let mut stats = Self {
            total_combos: TOTAL_COMBOS,
            ..Default::default()
        };

        for hand in ShorthandHand::all() {
            let cell = grid.get(hand);
            if !cell.is_active() {
                continue;
            }
            let combos = hand.num_combos();
            stats.selected_hands += 1;
            stats.selected_combos += combos;
            stats.weighted_combos += combos as f64 * cell.weight();
            match hand.suitedness() {
                Suitedness::Pair => stats.pairs += 1,
                Suitedness::Suited => stats.suited += 1,
                Suitedness::Offsuit => stats.offsuit += 1,
            }
        }

        let total = TOTAL_COMBOS as f64;
        stats.percentage = stats.selected_combos as f64 / total * 100.0;
        stats.weighted_percentage = stats.weighted_combos / total * 100.0;
        stats
    }
}

/// Compute statistics for a grid.
pub fn statistics<G: HandGrid>(grid: &G) -> RangeStats {
    RangeStats::from_grid(grid)
}

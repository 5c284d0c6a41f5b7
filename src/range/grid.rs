//! The 13x13 starting-hand grid.
//!
//! Rows and columns follow descending rank order (A first). Diagonal cells
//! are pairs, cells above the diagonal suited hands and cells below it
//! offsuit hands. Cells can be addressed by hand, by `(row, col)` or by
//! hand notation; all three resolve to the same cell.

use serde::Serialize;

use super::error::RangeError;
use super::hand::{ShorthandHand, NUM_HANDS};

/// One cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    hand: ShorthandHand,
    selected: bool,
    weight: f64,
}

impl GridCell {
    /// An unselected cell for `hand`.
    pub fn empty(hand: ShorthandHand) -> Self {
        Self { hand, selected: false, weight: 0.0 }
    }

    /// The hand this cell holds.
    pub fn hand(&self) -> ShorthandHand {
        self.hand
    }

    /// Whether the cell was selected, even with weight 0.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Inclusion frequency in [0, 1]. Always 0 when unselected.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Selected with a non-zero weight. Only active cells count as part of
    /// the range.
    pub fn is_active(&self) -> bool {
        self.selected && self.weight > 0.0
    }

    /// Update the cell. Deselecting always clears the weight.
    pub fn set(&mut self, selected: bool, weight: f64) -> Result<(), RangeError> {
        if !selected {
            self.selected = false;
            self.weight = 0.0;
            return Ok(());
        }
        if !(0.0..=1.0).contains(&weight) {
            return Err(RangeError::InvalidWeight(weight.to_string()));
        }
        self.selected = true;
        self.weight = weight;
        Ok(())
    }
}

/// Anything that names a grid cell.
pub trait CellAddress {
    /// Resolve to the hand the address names.
    fn resolve(&self) -> Result<ShorthandHand, RangeError>;
}

impl CellAddress for ShorthandHand {
    fn resolve(&self) -> Result<ShorthandHand, RangeError> {
        Ok(*self)
    }
}

impl CellAddress for (usize, usize) {
    fn resolve(&self) -> Result<ShorthandHand, RangeError> {
        ShorthandHand::from_grid_position(self.0, self.1)
    }
}

impl CellAddress for &str {
    fn resolve(&self) -> Result<ShorthandHand, RangeError> {
        self.parse::<ShorthandHand>()
            .map_err(|_| RangeError::OutOfRange(format!("hand {}", self)))
    }
}

/// Storage of the 169 cells.
///
/// The parser, compressor and statistics only depend on this trait, so any
/// container that can hand out a cell per hand can back a range.
pub trait HandGrid {
    /// The cell for `hand`.
    fn get(&self, hand: ShorthandHand) -> &GridCell;

    /// Mutable access to the cell for `hand`.
    fn get_mut(&mut self, hand: ShorthandHand) -> &mut GridCell;

    /// Look up a cell by hand, coordinates or notation.
    fn cell<A: CellAddress>(&self, address: A) -> Result<&GridCell, RangeError> {
        Ok(self.get(address.resolve()?))
    }

    /// Select or deselect a cell. Deselecting clears the weight regardless of
    /// the weight passed.
    fn set_cell<A: CellAddress>(&mut self, address: A, selected: bool, weight: f64) -> Result<(), RangeError> {
        let hand = address.resolve()?;
        self.get_mut(hand).set(selected, weight)
    }

    /// Clear every selection and weight.
    fn reset(&mut self) {
        for hand in ShorthandHand::all() {
            *self.get_mut(hand) = GridCell::empty(hand);
        }
    }

    /// Active hands with their weights, in canonical order.
    fn active_hands(&self) -> Vec<(ShorthandHand, f64)> {
        ShorthandHand::all()
            .map(|hand| self.get(hand))
            .filter(|cell| cell.is_active())
            .map(|cell| (cell.hand(), cell.weight()))
            .collect()
    }
}

/// The standard grid: 169 cells stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Vec<GridCell>,
}

impl Grid {
    /// Create an empty grid: every cell unselected with weight 0.
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(NUM_HANDS);
        for row in 0..13 {
            for col in 0..13 {
                // Coordinates below 13 always resolve.
                if let Ok(hand) = ShorthandHand::from_grid_position(row, col) {
                    cells.push(GridCell::empty(hand));
                }
            }
        }
        Self { cells }
    }

    /// Build a grid selecting each hand with its weight. Later entries
    /// overwrite earlier ones.
    pub fn from_hands<I>(hands: I) -> Result<Self, RangeError>
    where
        I: IntoIterator<Item = (ShorthandHand, f64)>,
    {
        let mut grid = Self::new();
        for (hand, weight) in hands {
            grid.set_cell(hand, true, weight)?;
        }
        Ok(grid)
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Result<&[GridCell], RangeError> {
        self.cells
            .get(row * 13..(row + 1) * 13)
            .ok_or_else(|| RangeError::OutOfRange(format!("row {}", row)))
    }

    /// The 13 rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(13)
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Number of selected cells, regardless of weight.
    pub fn num_selected(&self) -> usize {
        self.cells.iter().filter(|c| c.selected()).count()
    }

    fn offset(hand: ShorthandHand) -> usize {
        let (row, col) = hand.grid_position();
        row * 13 + col
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl HandGrid for Grid {
    fn get(&self, hand: ShorthandHand) -> &GridCell {
        &self.cells[Self::offset(hand)]
    }

    fn get_mut(&mut self, hand: ShorthandHand) -> &mut GridCell {
        &mut self.cells[Self::offset(hand)]
    }
}

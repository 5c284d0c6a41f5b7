//! Range notation engine.
//!
//! This module parses compact range notation into a 13x13 grid of the 169
//! starting hands, expands hands into specific combos, compresses a grid
//! back into minimal notation, and converts between notation formats.
//!
//! ## Modules
//!
//! - `hand`: Canonical hands (`AKs`, `QQ`, `72o`) and user-typed patterns
//! - `grid`: The 13x13 grid and the `HandGrid` trait
//! - `expand`: Hand to combo expansion
//! - `parser`: Comma-separated notation with plus, dash and weight suffixes
//! - `compress`: Grid back to notation
//! - `convert`: Combo format <-> shorthand format
//! - `stats`: Combo counts and range coverage

mod compress;
mod convert;
/// Errors raised by the engine.
pub mod error;
mod expand;
mod grid;
mod hand;
mod parser;
mod stats;

pub use compress::{compress, compress_hands, RangeCompressor};
pub use convert::{convert, Format, FormatConverter};
pub use error::RangeError;
pub use expand::{expand, ComboIter};
pub use grid::{CellAddress, Grid, GridCell, HandGrid};
pub use hand::{
    HandPattern, ShorthandHand, Suitedness, NUM_HANDS, OFFSUIT_COMBOS, PAIR_COMBOS, SUITED_COMBOS,
    TOTAL_COMBOS,
};
pub use parser::{parse_range, parse_weight, RangeExpr, RangeParser, RangeToken};
pub use stats::{statistics, RangeStats};

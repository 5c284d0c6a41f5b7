//! # Range Notation
//!
//! Parsing, compression and conversion of poker hand range notation.
//!
//! ## Features
//!
//! - **Parser**: "JJ+, ATs-A6s, AK, KQo:0.5" into a 13x13 grid of the 169
//!   starting hands, with per-hand weights
//! - **Expander**: any hand into its specific card combos (AA = 6, AKs = 4,
//!   AKo = 12, AK = 16)
//! - **Compressor**: a grid back into minimal notation, merging adjacent
//!   ranks with equal weights into dash-ranges
//! - **Converter**: specific-combo format ("AhKs,AdKd") <-> shorthand format
//! - **Statistics**: combo counts and range coverage
//!
//! ## Quick Start
//!
//! ```
//! use range_notation::range::{compress, convert, parse_range, statistics};
//!
//! let grid = parse_range("AA, AKs").unwrap();
//! let stats = statistics(&grid);
//! assert_eq!(stats.selected_combos, 10);
//!
//! assert_eq!(compress(&parse_range("TT,99,88").unwrap()), "TT-88");
//! assert_eq!(convert("AsKs,AhKh", "combo", "shorthand").unwrap(), "AKs");
//! ```
//!
//! ## Modules
//!
//! - [`card`]: Ranks, suits, cards and two-card combos
//! - [`range`]: The notation engine
//! - [`config`]: Engine configuration
//! - [`output`]: JSON reports and text rendering of a grid
//! - [`spots`]: Import of scenario files into ranges
//!
//! ## Architecture
//!
//! ```text
//!        notation text / combo text
//!                    │
//!                    ▼
//!   ┌──────────────────────────────────┐
//!   │ RangeParser / FormatConverter    │
//!   └──────────────────────────────────┘
//!                    │ fills
//!                    ▼
//!   ┌──────────────────────────────────┐
//!   │ Grid (169 cells, HandGrid trait) │
//!   └──────────────────────────────────┘
//!          │                   │
//!          ▼                   ▼
//!   ┌──────────────┐   ┌───────────────┐
//!   │ Compressor   │   │ RangeStats    │
//!   └──────────────┘   └───────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, ranks and suits.
pub mod card;

/// Engine configuration.
pub mod config;

/// Reports and text rendering.
pub mod output;

/// The range notation engine.
pub mod range;

/// Scenario file import.
pub mod spots;

// Re-export commonly used types at crate root for convenience
pub use card::{Card, HandCombo, Rank, Suit};
pub use config::{ConfigError, EngineConfig};
pub use output::RangeReport;
pub use range::{Format, Grid, HandGrid, RangeError, RangeStats, ShorthandHand};

//! Output formatting for ranges.
//!
//! `RangeReport` is what a caller hands back to a client: the compressed
//! notation, the statistics and the full 13x13 grid, serializable to JSON.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::card::Rank;
use crate::config::{ConfigError, EngineConfig};
use crate::range::{Grid, RangeCompressor, RangeStats};

/// One grid cell as reported to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellReport {
    /// Hand notation, "AKs".
    pub hand: String,
    /// True only for active cells.
    pub selected: bool,
    /// Weight of the cell, in [0, 1].
    pub weight: f64,
}

/// Notation, statistics and grid of a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeReport {
    /// Compressed notation of the active hands.
    pub notation: String,
    /// Combo counts of the range.
    pub stats: RangeStats,
    /// 13x13 grid for easy visualization, rows in descending rank order.
    pub grid: Vec<Vec<CellReport>>,
}

impl RangeReport {
    /// Build a report with the given configuration.
    pub fn new(grid: &Grid, config: &EngineConfig) -> Result<Self, ConfigError> {
        let notation = RangeCompressor::with_config(config.clone())?.compress(grid);
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| CellReport {
                        hand: cell.hand().to_string(),
                        selected: cell.is_active(),
                        weight: cell.weight(),
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            notation,
            stats: RangeStats::from_grid(grid),
            grid: rows,
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty-printed JSON to `path`.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

impl Grid {
    /// Draw the grid as text. Active cells show their weight as a
    /// percentage, inactive cells a dash.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("    ");
        for rank in Rank::DESCENDING {
            let _ = write!(out, "{:>5}", rank.to_char());
        }
        out.push('\n');

        for (rank, row) in Rank::DESCENDING.into_iter().zip(self.rows()) {
            let _ = write!(out, "{:>2}  ", rank.to_char());
            for cell in row {
                if cell.is_active() {
                    let pct = (cell.weight() * 100.0).round() as u32;
                    let _ = write!(out, "{:>5}", pct);
                } else {
                    let _ = write!(out, "{:>5}", "-");
                }
            }
            out.push('\n');
        }
        out
    }
}

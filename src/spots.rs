//! Import of scenario files.
//!
//! A scenario file is a JSON document listing named spots, each with
//! per-hand frequency, weight and EV fields:
//!
//! ```text
//! {
//!   "name": "BTN vs BB 100bb",
//!   "spots": [
//!     { "name": "BTN RFI",
//!       "hands": { "AA": { "frequency": 1.0 }, "A5s": { "weight": 0.5, "ev": 0.8 } } }
//!   ]
//! }
//! ```
//!
//! Each spot becomes a `SpotRange`: a grid plus its compressed notation and
//! statistics, ready to be stored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, EngineConfig};
use crate::range::{Grid, HandGrid, RangeCompressor, RangeError, RangeStats, ShorthandHand};

/// Per-hand data of a spot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandEntry {
    /// Solver frequency of the hand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Explicit range weight, preferred over `frequency`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Expected value of the hand in this spot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev: Option<f64>,
}

impl HandEntry {
    /// Weight of the hand in the range: `weight`, else `frequency`, else 1.
    pub fn effective_weight(&self) -> f64 {
        self.weight.or(self.frequency).unwrap_or(1.0)
    }
}

/// A named spot as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    /// Spot name, "BTN RFI".
    pub name: String,
    /// Hands keyed by notation ("AKs", "QQ").
    #[serde(default)]
    pub hands: BTreeMap<String, HandEntry>,
}

/// A scenario document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    /// Optional title of the scenario.
    #[serde(default)]
    pub name: Option<String>,
    /// Spots in file order.
    pub spots: Vec<Spot>,
}

/// A spot mapped onto the grid.
#[derive(Debug, Clone, Serialize)]
pub struct SpotRange {
    /// Name of the source spot.
    pub name: String,
    /// Compressed notation of the spot.
    pub notation: String,
    /// Combo counts of the spot.
    pub stats: RangeStats,
    /// EV per hand, for hands that declare one.
    pub ev: FxHashMap<ShorthandHand, f64>,
    /// The filled grid.
    #[serde(skip)]
    pub grid: Grid,
}

/// Errors raised while importing a scenario file.
#[derive(Debug, Error)]
pub enum SpotError {
    /// The scenario file could not be read.
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    /// The scenario file is not valid JSON for a scenario.
    #[error("Failed to parse scenario file: {0}")]
    Json(#[from] serde_json::Error),
    /// The engine configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// A spot names an unknown hand or carries a bad weight.
    #[error("Spot {spot:?}: {source}")]
    Range {
        /// Name of the failing spot.
        spot: String,
        /// What went wrong.
        source: RangeError,
    },
}

impl ScenarioFile {
    /// Parse a scenario document.
    pub fn from_json(json: &str) -> Result<Self, SpotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scenario document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SpotError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Map every spot onto a grid. Fails on the first spot naming an unknown
    /// hand or carrying a weight outside [0, 1].
    pub fn build_ranges(&self, config: &EngineConfig) -> Result<Vec<SpotRange>, SpotError> {
        let compressor = RangeCompressor::with_config(config.clone())?;
        let ranges = self
            .spots
            .iter()
            .map(|spot| {
                spot.to_range(&compressor).map_err(|source| SpotError::Range {
                    spot: spot.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        info!("imported {} spots", ranges.len());
        Ok(ranges)
    }
}

impl Spot {
    fn to_range(&self, compressor: &RangeCompressor) -> Result<SpotRange, RangeError> {
        let mut grid = Grid::new();
        let mut ev = FxHashMap::default();

        for (name, entry) in &self.hands {
            let hand: ShorthandHand = name.trim().parse()?;
            grid.set_cell(hand, true, entry.effective_weight())?;
            if let Some(value) = entry.ev {
                ev.insert(hand, value);
            }
        }

        let notation = compressor.compress(&grid);
        debug!("spot {:?} -> {}", self.name, notation);
        Ok(SpotRange {
            name: self.name.clone(),
            notation,
            stats: RangeStats::from_grid(&grid),
            ev,
            grid,
        })
    }
}

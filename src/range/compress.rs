//! Range compression: the inverse of parsing.
//!
//! Active hands are bucketed into pairs, suited and offsuit hands. Within a
//! bucket, runs of adjacent ranks sharing one high card and one weight are
//! merged into a dash-range ("TT-77", "ATs-A6s"). Runs never span two high
//! cards.

use log::debug;

use super::error::RangeError;
use super::grid::{Grid, HandGrid};
use super::hand::{ShorthandHand, Suitedness};
use crate::card::Rank;
use crate::config::{ConfigError, EngineConfig};

/// A maximal run of adjacent ranks with one weight, from `top` down to `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    top: Rank,
    bottom: Rank,
    weight: f64,
}

/// Split ranks (sorted descending) into runs. Adjacent means a rank index
/// difference of exactly one; the weight as printed is part of the merge key.
fn runs(ranks: &[(Rank, f64)]) -> Vec<Run> {
    let mut result: Vec<Run> = Vec::new();
    for &(rank, weight) in ranks {
        match result.last_mut() {
            Some(run) if run.bottom.index() == rank.index() + 1 && run.weight == weight => {
                run.bottom = rank;
            }
            _ => result.push(Run { top: rank, bottom: rank, weight }),
        }
    }
    result
}

/// Turns a grid back into minimal range notation.
#[derive(Debug, Clone, Default)]
pub struct RangeCompressor {
    config: EngineConfig,
}

impl RangeCompressor {
    /// Create a compressor with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration. The configuration is validated so
    /// that every output parses back.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compress the active hands of a grid. Pairs come first, then suited
    /// hands, then offsuit hands, each by descending rank.
    pub fn compress<G: HandGrid>(&self, grid: &G) -> String {
        let mut tokens = self.pair_tokens(grid);
        tokens.extend(self.non_pair_tokens(grid, Suitedness::Suited));
        tokens.extend(self.non_pair_tokens(grid, Suitedness::Offsuit));
        debug!("compressed range into {} tokens", tokens.len());
        tokens.join(&self.config.separator)
    }

    /// Compress an explicit list of hands. Later duplicates overwrite earlier
    /// ones.
    pub fn compress_hands(&self, hands: &[(ShorthandHand, f64)]) -> Result<String, RangeError> {
        let grid = Grid::from_hands(hands.iter().copied())?;
        Ok(self.compress(&grid))
    }

    fn pair_tokens<G: HandGrid>(&self, grid: &G) -> Vec<String> {
        let ranks: Vec<(Rank, f64)> = Rank::DESCENDING
            .into_iter()
            .map(|rank| grid.get(ShorthandHand::pair(rank)))
            .filter(|cell| cell.is_active())
            .map(|cell| (cell.hand().high(), self.config.round_weight(cell.weight())))
            .collect();

        runs(&ranks)
            .into_iter()
            .map(|run| {
                let (t, b) = (run.top, run.bottom);
                let body = if t == b {
                    format!("{}{}", t, t)
                } else if self.config.plus_notation && t == Rank::Ace {
                    format!("{}{}+", b, b)
                } else {
                    format!("{}{}-{}{}", t, t, b, b)
                };
                self.config.weighted_token(body, run.weight)
            })
            .collect()
    }

    fn non_pair_tokens<G: HandGrid>(&self, grid: &G, suitedness: Suitedness) -> Vec<String> {
        let mut tokens = Vec::new();
        for high in Rank::DESCENDING {
            let lows: Vec<(Rank, f64)> = Rank::DESCENDING
                .into_iter()
                .filter(|&low| low < high)
                .filter_map(|low| ShorthandHand::new(high, low, suitedness).ok())
                .map(|hand| grid.get(hand))
                .filter(|cell| cell.is_active())
                .map(|cell| (cell.hand().low(), self.config.round_weight(cell.weight())))
                .collect();

            let suffix = suitedness.suffix();
            for run in runs(&lows) {
                let (t, b) = (run.top, run.bottom);
                let body = if t == b {
                    format!("{}{}{}", high, t, suffix)
                } else if self.config.plus_notation && t.next() == Some(high) {
                    format!("{}{}{}+", high, b, suffix)
                } else {
                    format!("{}{}{}-{}{}{}", high, t, suffix, high, b, suffix)
                };
                tokens.push(self.config.weighted_token(body, run.weight));
            }
        }
        tokens
    }
}

/// Compress a grid with the default configuration.
pub fn compress<G: HandGrid>(grid: &G) -> String {
    RangeCompressor::new().compress(grid)
}

/// Compress an explicit hand list with the default configuration.
pub fn compress_hands(hands: &[(ShorthandHand, f64)]) -> Result<String, RangeError> {
    RangeCompressor::new().compress_hands(hands)
}

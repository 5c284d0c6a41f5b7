//! Range notation parsing.
//!
//! Supports: "AA", "AKs", "AKo", "AK" (both suited and offsuit), "TT+",
//! "AQs+", "A5s-A2s", "TT-77", each with an optional ":<weight>" suffix.
//! Tokens are comma-separated; later tokens overwrite earlier ones.

use log::{debug, trace};

use super::error::RangeError;
use super::grid::{Grid, HandGrid};
use super::hand::{HandPattern, ShorthandHand};
use crate::card::Rank;
use crate::config::{ConfigError, EngineConfig};

/// The shape of a single range token, without its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpr {
    /// A single hand: "AKs", "QQ", or "AK" for both suitedness variants.
    Single(HandPattern),
    /// This hand and everything stronger with the same high card: "TT+", "A9s+".
    Plus(HandPattern),
    /// Inclusive span between two hands: "TT-77", "ATs-A6s".
    Dash(HandPattern, HandPattern),
}

impl RangeExpr {
    /// The canonical hands this expression selects.
    pub fn hands(&self) -> Vec<ShorthandHand> {
        match *self {
            RangeExpr::Single(pattern) => pattern.hands(),
            RangeExpr::Plus(pattern) if pattern.is_pair() => Rank::span(pattern.low, Rank::Ace)
                .map(ShorthandHand::pair)
                .collect(),
            RangeExpr::Plus(pattern) => Rank::ALL[pattern.low.index() as usize..pattern.high.index() as usize]
                .iter()
                .flat_map(|&low| pattern.with_low(low).hands())
                .collect(),
            RangeExpr::Dash(start, end) if start.is_pair() => Rank::span(start.high, end.high)
                .map(ShorthandHand::pair)
                .collect(),
            RangeExpr::Dash(start, end) => Rank::span(start.low, end.low)
                .flat_map(|low| start.with_low(low).hands())
                .collect(),
        }
    }
}

/// One parsed unit of range notation.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeToken {
    /// Which hands the token names.
    pub expr: RangeExpr,
    /// Inclusion frequency in [0, 1]; 1.0 when no suffix was given.
    pub weight: f64,
}

impl RangeToken {
    /// Parse one token such as "AQs+", "TT-77:0.5" or "AK".
    pub fn parse(token: &str, case_sensitive: bool) -> Result<Self, RangeError> {
        let token = token.trim();
        let (body, weight) = match token.split_once(':') {
            Some((body, weight)) => (body.trim(), parse_weight(weight.trim())?),
            None => (token, 1.0),
        };

        let expr = if let Some(base) = body.strip_suffix('+') {
            RangeExpr::Plus(HandPattern::parse(base.trim(), case_sensitive)?)
        } else if body.contains('-') {
            parse_dash(body, case_sensitive)?
        } else {
            RangeExpr::Single(HandPattern::parse(body, case_sensitive)?)
        };

        Ok(Self { expr, weight })
    }
}

/// Parse a weight suffix; it must be a number in [0, 1].
pub fn parse_weight(text: &str) -> Result<f64, RangeError> {
    let weight: f64 = text
        .parse()
        .map_err(|_| RangeError::InvalidWeight(text.to_string()))?;
    // NaN fails `contains` as well.
    if !(0.0..=1.0).contains(&weight) {
        return Err(RangeError::InvalidWeight(text.to_string()));
    }
    Ok(weight)
}

/// Parse "start-end". Both ends must be pairs, or non-pairs sharing the same
/// high rank and the same suitedness qualifier.
fn parse_dash(body: &str, case_sensitive: bool) -> Result<RangeExpr, RangeError> {
    let invalid = || RangeError::InvalidRangeExpression(body.to_string());
    let parts: Vec<&str> = body.split('-').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let start = HandPattern::parse(parts[0], case_sensitive)?;
    let end = HandPattern::parse(parts[1], case_sensitive)?;

    let compatible = if start.is_pair() || end.is_pair() {
        start.is_pair() && end.is_pair()
    } else {
        start.high == end.high && start.suitedness == end.suitedness
    };
    if !compatible {
        return Err(invalid());
    }
    Ok(RangeExpr::Dash(start, end))
}

/// Parses range notation into a grid.
#[derive(Debug, Clone, Default)]
pub struct RangeParser {
    config: EngineConfig,
}

impl RangeParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration. Fails on an invalid configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Split notation into tokens. Empty tokens are skipped.
    pub fn tokenize(&self, notation: &str) -> Result<Vec<RangeToken>, RangeError> {
        notation
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                RangeToken::parse(part, self.config.case_sensitive).map(|token| {
                    trace!("token {:?} -> {:?}", part, token);
                    token
                })
            })
            .collect()
    }

    /// Parse notation into a fresh grid.
    pub fn parse(&self, notation: &str) -> Result<Grid, RangeError> {
        let mut grid = Grid::new();
        self.parse_into(notation, &mut grid)?;
        Ok(grid)
    }

    /// Parse notation on top of an existing grid.
    ///
    /// Every token is validated before the grid is touched, so on error the
    /// grid is left exactly as it was. Call [`HandGrid::reset`] first to
    /// replace rather than extend the grid's contents.
    pub fn parse_into<G: HandGrid>(&self, notation: &str, grid: &mut G) -> Result<(), RangeError> {
        let tokens = self.tokenize(notation)?;

        let mut marked = 0;
        for token in &tokens {
            for hand in token.expr.hands() {
                grid.set_cell(hand, true, token.weight)?;
                marked += 1;
            }
        }

        debug!("parsed {} tokens, marked {} hands", tokens.len(), marked);
        Ok(())
    }
}

/// Parse notation into a fresh grid with the default configuration.
///
/// ```
/// use range_notation::range::{parse_range, HandGrid};
///
/// let grid = parse_range("JJ+, AKs:0.5").unwrap();
/// assert!(grid.cell("QQ").unwrap().selected());
/// assert_eq!(grid.cell("AKs").unwrap().weight(), 0.5);
/// ```
pub fn parse_range(notation: &str) -> Result<Grid, RangeError> {
    RangeParser::new().parse(notation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(grid: &Grid) -> Vec<String> {
        let mut names: Vec<String> = grid
            .iter()
            .filter(|c| c.selected())
            .map(|c| c.hand().to_string())
            .collect();
        names.sort();
        names
    }

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_parse_pairs() {
        let grid = parse_range("AA").unwrap();
        assert_eq!(selected(&grid), sorted(&["AA"]));

        let grid = parse_range("AA, KK, QQ").unwrap();
        assert_eq!(grid.num_selected(), 3);
    }

    #[test]
    fn test_parse_suited_offsuit() {
        assert_eq!(selected(&parse_range("AKs").unwrap()), sorted(&["AKs"]));
        assert_eq!(selected(&parse_range("AKo").unwrap()), sorted(&["AKo"]));
        assert_eq!(selected(&parse_range("AK").unwrap()), sorted(&["AKs", "AKo"]));
        assert_eq!(selected(&parse_range("KA").unwrap()), sorted(&["AKs", "AKo"]));
    }

    #[test]
    fn test_plus_notation_boundaries() {
        assert_eq!(selected(&parse_range("JJ+").unwrap()), sorted(&["JJ", "QQ", "KK", "AA"]));

        let grid = parse_range("22+").unwrap();
        assert_eq!(grid.num_selected(), 13);
        assert!(grid.iter().filter(|c| c.selected()).all(|c| c.hand().is_pair()));

        assert_eq!(selected(&parse_range("AQs+").unwrap()), sorted(&["AQs", "AKs"]));
        assert_eq!(selected(&parse_range("KTo+").unwrap()), sorted(&["KTo", "KJo", "KQo"]));
        assert_eq!(selected(&parse_range("AQ+").unwrap()), sorted(&["AQs", "AKs", "AQo", "AKo"]));
    }

    #[test]
    fn test_dash_notation_boundaries() {
        assert_eq!(
            selected(&parse_range("ATs-A6s").unwrap()),
            sorted(&["ATs", "A9s", "A8s", "A7s", "A6s"])
        );
        assert_eq!(selected(&parse_range("TT-77").unwrap()), sorted(&["TT", "99", "88", "77"]));
        // Order of the endpoints does not matter.
        assert_eq!(selected(&parse_range("77-TT").unwrap()), sorted(&["TT", "99", "88", "77"]));
        assert_eq!(
            selected(&parse_range("K9-K7").unwrap()),
            sorted(&["K9s", "K8s", "K7s", "K9o", "K8o", "K7o"])
        );
    }

    #[test]
    fn test_malformed_dash_ranges() {
        for notation in ["ATs-K6s", "ATs-A6o", "ATs-A6", "TT-A6s", "AA-KK-QQ", "AKs-"] {
            let err = parse_range(notation).unwrap_err();
            assert!(
                matches!(err, RangeError::InvalidRangeExpression(_) | RangeError::InvalidHandNotation(_)),
                "{} gave {:?}",
                notation,
                err
            );
        }
        assert!(matches!(
            parse_range("ATs-K6s"),
            Err(RangeError::InvalidRangeExpression(_))
        ));
        assert!(matches!(
            parse_range("ATs-A6o"),
            Err(RangeError::InvalidRangeExpression(_))
        ));
    }

    #[test]
    fn test_weights() {
        let grid = parse_range("AKs:0.5, QQ").unwrap();
        assert_eq!(grid.cell("AKs").unwrap().weight(), 0.5);
        assert_eq!(grid.cell("QQ").unwrap().weight(), 1.0);

        let grid = parse_range("TT-88:0.25").unwrap();
        assert_eq!(grid.cell("99").unwrap().weight(), 0.25);

        for notation in ["AKs:1.5", "AKs:-0.1", "AKs:abc", "AKs:", "AKs:NaN", "AKs:0.5:0.5"] {
            assert!(
                matches!(parse_range(notation), Err(RangeError::InvalidWeight(_))),
                "{} should be an invalid weight",
                notation
            );
        }
    }

    #[test]
    fn test_last_token_wins() {
        let grid = parse_range("AKs:0.5, AK:0.2").unwrap();
        assert_eq!(grid.cell("AKs").unwrap().weight(), 0.2);

        let grid = parse_range("TT+:0.3, QQ").unwrap();
        assert_eq!(grid.cell("QQ").unwrap().weight(), 1.0);
        assert_eq!(grid.cell("JJ").unwrap().weight(), 0.3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_range("").unwrap(), Grid::new());
        assert_eq!(parse_range("   ").unwrap(), Grid::new());
        assert_eq!(parse_range(" , ,").unwrap(), Grid::new());
    }

    #[test]
    fn test_invalid_rank_aborts_whole_parse() {
        let mut grid = parse_range("AA").unwrap();
        let before = grid.clone();
        let err = RangeParser::new().parse_into("KK, QXs, JJ", &mut grid).unwrap_err();
        assert_eq!(err, RangeError::InvalidHandNotation("QXs".to_string()));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_pair_with_qualifier_rejected() {
        assert!(matches!(parse_range("AAs"), Err(RangeError::InvalidHandNotation(_))));
        assert!(matches!(parse_range("QQo+"), Err(RangeError::InvalidHandNotation(_))));
    }

    #[test]
    fn test_case_sensitivity() {
        assert_eq!(selected(&parse_range("aks, tt").unwrap()), sorted(&["AKs", "TT"]));

        let strict = RangeParser::with_config(EngineConfig::default().with_case_sensitive(true)).unwrap();
        assert!(strict.parse("aks").is_err());
        assert!(strict.parse("AKs").is_ok());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig::default().with_weight_precision(12);
        assert!(matches!(
            RangeParser::with_config(config),
            Err(ConfigError::InvalidPrecision(12))
        ));
    }

    #[test]
    fn test_parse_into_extends_until_reset() {
        let parser = RangeParser::new();
        let mut grid = parser.parse("AA").unwrap();
        parser.parse_into("KK", &mut grid).unwrap();
        assert_eq!(grid.num_selected(), 2);

        grid.reset();
        parser.parse_into("KK", &mut grid).unwrap();
        assert_eq!(selected(&grid), sorted(&["KK"]));
    }
}

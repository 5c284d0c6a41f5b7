//! Conversion between the specific-combo format ("AhKs,AdKd:0.5") and the
//! shorthand format ("AKs:0.5,TT-77").

use std::fmt;
use std::str::FromStr;

use log::debug;

use super::compress::RangeCompressor;
use super::error::RangeError;
use super::grid::{Grid, HandGrid};
use super::parser::{parse_weight, RangeParser};
use crate::card::HandCombo;
use crate::config::{ConfigError, EngineConfig};

/// A range notation dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Canonical hands with plus/dash ranges: "JJ+,AKs:0.5".
    Shorthand,
    /// Explicit two-card combos: "AhKs,AdKd:0.5".
    Combo,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 2] = [Format::Shorthand, Format::Combo];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Shorthand => "shorthand",
            Format::Combo => "combo",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shorthand" | "range" | "compact" => Ok(Format::Shorthand),
            "combo" | "combos" | "specific" => Ok(Format::Combo),
            _ => Err(RangeError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Converts range text between formats, preserving per-hand weights.
#[derive(Debug, Clone, Default)]
pub struct FormatConverter {
    config: EngineConfig,
    parser: RangeParser,
    compressor: RangeCompressor,
}

impl FormatConverter {
    /// Create a converter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration. Fails on an invalid configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            parser: RangeParser::with_config(config.clone())?,
            compressor: RangeCompressor::with_config(config.clone())?,
            config,
        })
    }

    /// Convert between formats given by name. Unknown names fail with
    /// `UnsupportedFormat` even when both names are equal.
    pub fn convert_named(&self, text: &str, from: &str, to: &str) -> Result<String, RangeError> {
        let from: Format = from.parse()?;
        let to: Format = to.parse()?;
        self.convert(text, from, to)
    }

    /// Convert `text` from one format to another. Equal formats return the
    /// input unchanged.
    pub fn convert(&self, text: &str, from: Format, to: Format) -> Result<String, RangeError> {
        if from == to {
            return Ok(text.to_string());
        }
        debug!("converting {} -> {}", from, to);
        let grid = self.read(text, from)?;
        Ok(self.write(&grid, to))
    }

    /// Read text in the given format into a grid.
    pub fn read(&self, text: &str, format: Format) -> Result<Grid, RangeError> {
        match format {
            Format::Shorthand => self.parser.parse(text),
            Format::Combo => self.parse_combos(text),
        }
    }

    /// Serialize the active hands of a grid in the given format.
    pub fn write<G: HandGrid>(&self, grid: &G, format: Format) -> String {
        match format {
            Format::Shorthand => self.compressor.compress(grid),
            Format::Combo => self.combos_string(grid),
        }
    }

    /// Group combo tokens into their shorthand hands.
    ///
    /// Suits are dropped: any combo of a hand selects the whole hand, with
    /// the combo's weight. When combos of one hand carry different weights the
    /// last one wins, as with repeated tokens in shorthand notation.
    pub fn parse_combos(&self, text: &str) -> Result<Grid, RangeError> {
        let combos = text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_combo_token)
            .collect::<Result<Vec<_>, _>>()?;

        let mut grid = Grid::new();
        for (combo, weight) in &combos {
            grid.set_cell(combo.shorthand(), true, *weight)?;
        }
        debug!("grouped {} combos into {} hands", combos.len(), grid.num_selected());
        Ok(grid)
    }

    /// Every combo of every active hand, in canonical hand order, each with
    /// its hand's weight.
    pub fn combos_string<G: HandGrid>(&self, grid: &G) -> String {
        grid.active_hands()
            .into_iter()
            .flat_map(|(hand, weight)| hand.combos().map(move |combo| (combo, weight)))
            .map(|(combo, weight)| self.config.weighted_token(combo.to_string(), weight))
            .collect::<Vec<_>>()
            .join(&self.config.separator)
    }
}

/// Parse "AhKs" or "AhKs:0.5".
fn parse_combo_token(token: &str) -> Result<(HandCombo, f64), RangeError> {
    let (body, weight) = match token.split_once(':') {
        Some((body, weight)) => (body.trim(), parse_weight(weight.trim())?),
        None => (token, 1.0),
    };
    Ok((body.parse()?, weight))
}

/// Convert between formats given by name, with the default configuration.
///
/// ```
/// use range_notation::range::convert;
///
/// assert_eq!(convert("AhKs,AdKc", "combo", "shorthand").unwrap(), "AKo");
/// assert_eq!(convert("QQ", "shorthand", "shorthand").unwrap(), "QQ");
/// assert!(convert("QQ", "pio", "shorthand").is_err());
/// ```
pub fn convert(text: &str, from: &str, to: &str) -> Result<String, RangeError> {
    FormatConverter::new().convert_named(text, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!("Shorthand".parse::<Format>().unwrap(), Format::Shorthand);
        assert_eq!("combos".parse::<Format>().unwrap(), Format::Combo);
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert_eq!(
            "pio".parse::<Format>(),
            Err(RangeError::UnsupportedFormat("pio".to_string()))
        );
    }

    #[test]
    fn test_same_format_is_identity() {
        for text in ["", "  AKs , junk::", "AhKs", "not a range"] {
            for format in Format::ALL {
                assert_eq!(convert(text, format.name(), format.name()).unwrap(), text);
            }
        }
    }

    #[test]
    fn test_unsupported_format_is_reported() {
        assert!(matches!(
            convert("AA", "shorthand", "gto+"),
            Err(RangeError::UnsupportedFormat(_))
        ));
        assert!(matches!(convert("", "x", "x"), Err(RangeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_combo_to_shorthand_grouping() {
        assert_eq!(convert("AhAs", "combo", "shorthand").unwrap(), "AA");
        assert_eq!(convert("AsKs, AhKh", "combo", "shorthand").unwrap(), "AKs");
        assert_eq!(convert("AhKs, KdAc", "combo", "shorthand").unwrap(), "AKo");
        assert_eq!(
            convert("AsKs, AhKd, QcQd, JsJh", "combo", "shorthand").unwrap(),
            "QQ-JJ,AKs,AKo"
        );
    }

    #[test]
    fn test_combo_weights() {
        assert_eq!(convert("AsKs:0.5, AhKh:0.5", "combo", "shorthand").unwrap(), "AKs:0.5");
        assert_eq!(convert("AsKs:0.5, AhKh:0.25", "combo", "shorthand").unwrap(), "AKs:0.25");
    }

    #[test]
    fn test_shorthand_to_combo_counts() {
        let count = |text: &str| -> usize {
            let out = convert(text, "shorthand", "combo").unwrap();
            out.split(',').filter(|s| !s.is_empty()).count()
        };
        assert_eq!(count("AA"), 6);
        assert_eq!(count("AKs"), 4);
        assert_eq!(count("AKo"), 12);
        assert_eq!(count("AK"), 16);
        assert_eq!(count("JJ+, AKs"), 28);
        assert_eq!(count(""), 0);
    }

    #[test]
    fn test_shorthand_to_combo_weights() {
        let out = convert("AKs:0.5", "shorthand", "combo").unwrap();
        assert_eq!(out, "AcKc:0.5,AdKd:0.5,AhKh:0.5,AsKs:0.5");

        let out = convert("QQ", "shorthand", "combo").unwrap();
        assert!(out.split(',').all(|t| !t.contains(':')));
    }

    #[test]
    fn test_roundtrip_through_combos() {
        let converter = FormatConverter::new();
        for text in ["TT-77,ATs-A6s", "AA,KQo:0.5", "AKs,AKo", "22,K9s-K7s:0.25"] {
            let combos = converter.convert(text, Format::Shorthand, Format::Combo).unwrap();
            let back = converter.convert(&combos, Format::Combo, Format::Shorthand).unwrap();
            assert_eq!(back, text);
        }
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            convert("AhKs, AhAh", "combo", "shorthand"),
            Err(RangeError::InvalidHandNotation(_))
        ));
        assert!(matches!(
            convert("AhKx", "combo", "shorthand"),
            Err(RangeError::InvalidHandNotation(_))
        ));
        assert!(matches!(
            convert("AhKs:2", "combo", "shorthand"),
            Err(RangeError::InvalidWeight(_))
        ));
        assert!(matches!(
            convert("AKs-QJs", "shorthand", "combo"),
            Err(RangeError::InvalidRangeExpression(_))
        ));
    }

    #[test]
    fn test_custom_separator() {
        let converter = FormatConverter::with_config(EngineConfig::default().with_separator(", ")).unwrap();
        let out = converter.convert("AhAs,KhKs", Format::Combo, Format::Shorthand).unwrap();
        assert_eq!(out, "AA-KK");
        let out = converter.convert("AKs", Format::Shorthand, Format::Combo).unwrap();
        assert_eq!(out, "AcKc, AdKd, AhKh, AsKs");

        assert!(FormatConverter::with_config(EngineConfig::default().with_separator(";")).is_err());
    }
}

//! Configuration options for the range engine.
//!
//! The configuration controls presentation and input leniency. It never
//! changes which hands a notation string selects.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters with a meaning inside a range token.
const RESERVED: [char; 3] = [':', '+', '-'];

/// Largest accepted `weight_precision`.
const MAX_PRECISION: usize = 10;

/// Configuration for parsing and serializing ranges.
///
/// # Example
/// ```
/// use range_notation::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.separator, ",");
/// assert!(!config.plus_notation);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Separator placed between tokens when serializing.
    ///
    /// Parsing always splits on commas, so the separator must contain one
    /// (", " is a common choice).
    pub separator: String,

    /// Maximum number of decimals when formatting weights.
    ///
    /// Trailing zeros are trimmed. `None` prints the shortest representation
    /// that parses back to the same value.
    pub weight_precision: Option<usize>,

    /// Emit "JJ+" / "ATs+" for runs that reach the top of their span instead
    /// of a dash-range.
    pub plus_notation: bool,

    /// Reject lowercase rank letters.
    pub case_sensitive: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            weight_precision: None,
            plus_notation: false,
            case_sensitive: false,
        }
    }
}

impl EngineConfig {
    /// Create a new EngineConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortest output: plus-notation where possible, weights to 3 decimals.
    pub fn compact() -> Self {
        Self {
            plus_notation: true,
            weight_precision: Some(3),
            ..Default::default()
        }
    }

    /// Builder method: set the output separator.
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    /// Builder method: set the weight precision.
    pub fn with_weight_precision(mut self, precision: usize) -> Self {
        self.weight_precision = Some(precision);
        self
    }

    /// Builder method: set whether to emit plus-notation.
    pub fn with_plus_notation(mut self, enable: bool) -> Self {
        self.plus_notation = enable;
        self
    }

    /// Builder method: set whether rank letters are case-sensitive.
    pub fn with_case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.separator.contains(',') || self.separator.contains(RESERVED) {
            return Err(ConfigError::InvalidSeparator(self.separator.clone()));
        }

        if let Some(precision) = self.weight_precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::InvalidPrecision(precision));
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Round a weight to `weight_precision` decimals.
    ///
    /// Weights strictly between 0 and 1 stay strictly between 0 and 1: they
    /// clamp to the nearest representable step instead of rounding to "0"
    /// or "1". With precision 0 there is no such step and they are kept
    /// exact.
    pub fn round_weight(&self, weight: f64) -> f64 {
        let precision = match self.weight_precision {
            Some(precision) => precision,
            None => return weight,
        };
        let partial = weight > 0.0 && weight < 1.0;
        if precision == 0 && partial {
            return weight;
        }

        let scale = 10f64.powi(precision as i32);
        let rounded = (weight * scale).round() / scale;
        if partial {
            rounded.clamp(1.0 / scale, (scale - 1.0) / scale)
        } else {
            rounded
        }
    }

    /// Format a weight according to `weight_precision`.
    pub fn format_weight(&self, weight: f64) -> String {
        self.round_weight(weight).to_string()
    }

    /// Append ":<weight>" to a token unless the weight is exactly 1.
    pub fn weighted_token(&self, body: String, weight: f64) -> String {
        if weight == 1.0 {
            body
        } else {
            format!("{}:{}", body, self.format_weight(weight))
        }
    }
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Separator lacks a comma or contains a range metacharacter.
    #[error("Separator {0:?} must contain ',' and none of ':', '+', '-'")]
    InvalidSeparator(String),
    /// Weight precision is larger than supported.
    #[error("Weight precision {0} is out of range [0, 10]")]
    InvalidPrecision(usize),
    /// The configuration file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration is not valid JSON for this struct.
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::compact().validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let config = EngineConfig::default().with_separator(" ");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSeparator(_))));

        let config = EngineConfig::default().with_separator(",-");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSeparator(_))));

        let config = EngineConfig::default().with_weight_precision(11);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPrecision(11))));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = EngineConfig::from_json(r#"{ "plus_notation": true }"#).unwrap();
        assert!(config.plus_notation);
        assert_eq!(config.separator, ",");
        assert_eq!(config.weight_precision, None);

        assert!(matches!(
            EngineConfig::from_json(r#"{ "separator": "|" }"#),
            Err(ConfigError::InvalidSeparator(_))
        ));
        assert!(matches!(EngineConfig::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/range-config.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_format_weight() {
        let exact = EngineConfig::default();
        assert_eq!(exact.format_weight(0.5), "0.5");
        assert_eq!(exact.format_weight(0.125), "0.125");

        let rounded = EngineConfig::default().with_weight_precision(2);
        assert_eq!(rounded.format_weight(0.333333), "0.33");
        assert_eq!(rounded.format_weight(0.5), "0.5");
        assert_eq!(rounded.format_weight(1.0), "1");
        assert_eq!(rounded.format_weight(0.0), "0");

        let whole = EngineConfig::default().with_weight_precision(0);
        assert_eq!(whole.format_weight(0.4), "0.4");
        assert_eq!(whole.format_weight(1.0), "1");
    }

    #[test]
    fn test_rounding_never_reaches_bounds() {
        let config = EngineConfig::compact();
        assert_eq!(config.format_weight(0.9999), "0.999");
        assert_eq!(config.format_weight(0.0004), "0.001");
        assert_eq!(config.round_weight(0.3331), config.round_weight(0.3334));

        assert_eq!(config.weighted_token("AKs".to_string(), 0.9999), "AKs:0.999");
        assert_eq!(config.weighted_token("AKs".to_string(), 1.0), "AKs");
    }
}

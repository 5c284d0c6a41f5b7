//! Error type shared by every range operation.

use thiserror::Error;

/// Errors reported by the range engine.
///
/// Each variant carries the offending token or input so the caller can
/// report exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Malformed or unrecognized rank/suit token.
    #[error("Invalid hand notation: {0}")]
    InvalidHandNotation(String),

    /// Dash- or plus-range whose endpoints are structurally incompatible.
    #[error("Invalid range expression: {0}")]
    InvalidRangeExpression(String),

    /// Weight suffix that is not a number or lies outside [0, 1].
    #[error("Invalid weight: {0} (expected a number in [0, 1])")]
    InvalidWeight(String),

    /// Conversion format outside the supported set.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Grid coordinate or rank lookup outside the valid domain.
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

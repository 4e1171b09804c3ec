//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a LUT.
///
/// Every curve parameter except gamma is clamped into its domain, so the
/// only rejected input is a gamma exponent that is not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LutError {
    /// Gamma must be a positive number.
    #[error("invalid gamma {0}: must be greater than zero")]
    InvalidGamma(f64),
}

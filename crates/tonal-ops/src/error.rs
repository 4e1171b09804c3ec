//! Error types for tone operators.

use thiserror::Error;
use tonal_core::Error as ImageError;
use tonal_lut::LutError;

/// Error type for tone operators.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The source could not be read, or its geometry is unusable.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// A curve parameter was rejected.
    #[error("invalid parameter: {0}")]
    Validation(#[from] LutError),
}

impl OpsError {
    /// Returns `true` for rejected parameters.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if the caller's source failed to produce pixels.
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Image(e) if e.is_source_error())
    }
}

/// Result type for tone operators.
pub type OpsResult<T> = Result<T, OpsError>;

//! Error types for tonal-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the adapter layer:
//! - Buffer geometry that cannot be represented (overflow, short data)
//! - Row strides narrower than a packed row
//! - Failures reported by the source image itself
//!
//! Source failures are carried as a [`BoxError`] so the decoding
//! collaborator's own error type reaches the caller intact:
//!
//! ```rust
//! use tonal_core::{BoxError, Error};
//!
//! let inner: BoxError = "truncated scanline".into();
//! let err = Error::Source(inner);
//! assert!(err.is_source_error());
//! assert!(std::error::Error::source(&err).is_some());
//! ```
//!
//! # Used By
//!
//! - [`crate::adapt::adapt`] - Source reads
//! - [`crate::buffer::RgbaBuffer`] - Buffer construction
//! - [`crate::source::PackedView`] - View validation
//! - `tonal-ops` - Wrapped into `OpsError`

use crate::Rect;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by a [`SourceView`](crate::SourceView) that failed to read.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or adapting RGBA buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image could not be read.
    ///
    /// The wrapped error is the one returned by the source, untouched.
    #[error("source image could not be read: {0}")]
    Source(#[source] BoxError),

    /// Invalid image dimensions.
    ///
    /// Returned when buffer size calculations would overflow.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Stride is too small for the given width and pixel size.
    #[error("stride {stride} is less than minimum {min_stride} for width {width}")]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Minimum required stride
        min_stride: usize,
        /// Image width
        width: u32,
    },

    /// Backing data is shorter than the geometry requires.
    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required by width, height and stride
        required: usize,
        /// Bytes provided
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidStride`] error.
    #[inline]
    pub fn invalid_stride(stride: usize, min_stride: usize, width: u32) -> Self {
        Self::InvalidStride {
            stride,
            min_stride,
            width,
        }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, actual: usize) -> Self {
        Self::BufferTooSmall { required, actual }
    }

    /// Wraps a source failure.
    #[inline]
    pub fn from_source(err: impl Into<BoxError>) -> Self {
        Self::Source(err.into())
    }

    /// Returns `true` if the error came from the source image.
    #[inline]
    pub fn is_source_error(&self) -> bool {
        matches!(self, Self::Source(_))
    }

    /// Returns `true` if this is a geometry error.
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::InvalidStride { .. } | Self::BufferTooSmall { .. }
        )
    }
}

/// Computes `stride * height`, reporting overflow as [`Error::InvalidDimensions`].
pub(crate) fn checked_len(width: u32, height: u32, stride: usize) -> Result<usize> {
    stride
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows usize"))
}

/// Computes `width * 4`, reporting overflow as [`Error::InvalidDimensions`].
pub(crate) fn packed_stride(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(4)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "row size overflows usize"))
}

/// Rejects non-empty bounds whose pixels would need coordinates past `i32`.
pub(crate) fn check_addressable(bounds: Rect) -> Result<()> {
    if bounds.is_addressable() {
        Ok(())
    } else {
        Err(Error::invalid_dimensions(
            bounds.width,
            bounds.height,
            "visible rectangle exceeds the i32 coordinate range",
        ))
    }
}

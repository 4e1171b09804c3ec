//! # tonal-lut
//!
//! Byte lookup tables and tone-curve builders.
//!
//! Every per-channel adjustment in tonal reduces to a [`Lut8`]: 256 output
//! bytes, one per possible input byte, built once and then only read.
//!
//! - [`Lut8`] - The table itself, with composition via [`Lut8::then`]
//! - [`quantize`] - Shared rounding policy (round half up, clamp to a byte)
//! - [`curves`] - Contrast, brightness, gamma, sigmoid and invert builders
//!
//! ## Example
//!
//! ```rust
//! use tonal_lut::curves;
//!
//! let lut = curves::brightness(10.0).then(&curves::gamma(0.8)?);
//! assert_eq!(lut[255], 255);
//! # Ok::<(), tonal_lut::LutError>(())
//! ```

#![warn(missing_docs)]

pub mod curves;
pub mod error;
pub mod lut8;
mod quantize;

pub use curves::{brightness, contrast, gamma, invert, logistic, sigmoid};
pub use error::{LutError, LutResult};
pub use lut8::Lut8;
pub use quantize::quantize;

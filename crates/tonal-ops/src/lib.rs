//! # tonal-ops
//!
//! Point-wise tone adjustments for RGBA8 images.
//!
//! Every operator takes any [`SourceView`](tonal_core::SourceView), adapts it
//! into a packed straight-alpha buffer, and returns a new
//! [`RgbaBuffer`](tonal_core::RgbaBuffer) with each pixel transformed
//! independently. Work is split by rows across the rayon pool.
//!
//! ## Operators
//!
//! - [`grayscale`], [`invert`]
//! - [`adjust_contrast`], [`adjust_brightness`], [`adjust_gamma`],
//!   [`adjust_sigmoid`]
//! - [`apply_lut`], [`adjust_func`] for custom curves
//! - [`Adjustment`] and [`apply_chain`] for stored pipelines
//!
//! ## Example
//!
//! ```rust
//! use tonal_core::RgbaBuffer;
//! use tonal_ops::{adjust_contrast, grayscale};
//!
//! let img = RgbaBuffer::filled(16, 16, [0xaa, 0x33, 0xbb, 0xff]);
//! let gray = grayscale(&img)?;
//! assert_eq!(gray.pixel(0, 0), [0x66, 0x66, 0x66, 0xff]);
//!
//! let flat = adjust_contrast(&img, -100.0)?;
//! assert_eq!(flat.pixel(5, 5), [0x80, 0x80, 0x80, 0xff]);
//! # Ok::<(), tonal_ops::OpsError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Run row chunks on the rayon pool; also enables
//!   `tonal-core/parallel` so sources are adapted in parallel
//! - `serde` - Serialization for [`Adjustment`] and [`ParallelConfig`]

#![warn(missing_docs)]

pub mod adjust;
pub mod adjustment;
pub mod error;
pub mod parallel;

pub use adjust::{
    adjust_brightness, adjust_contrast, adjust_func, adjust_gamma, adjust_sigmoid, apply_lut,
    grayscale, invert, luma,
};
pub use adjustment::{apply_chain, Adjustment};
pub use error::{OpsError, OpsResult};
pub use parallel::ParallelConfig;

//! # tonal-core
//!
//! Core types for point-wise tone adjustment of RGBA8 images.
//!
//! - [`RgbaBuffer`] - Canonical straight-alpha RGBA8 buffer
//! - [`SourceView`] - Read-only capability over a caller's image
//! - [`PackedView`], [`IndexedView`], [`FnSource`] - Ready-made sources
//! - [`adapt`] - Normalizes any source into a packed [`RgbaBuffer`]
//! - [`Rect`] - Visible rectangles, negative origins allowed
//!
//! ## Design Philosophy
//!
//! Operators never see the caller's image type. Whatever the storage
//! (strided sub-image, paletted, premultiplied), the adapter produces one
//! canonical layout and every curve works on that:
//!
//! ```rust
//! use tonal_core::{adapt, AlphaMode, PackedView};
//!
//! let premul = [0x40, 0x20, 0x00, 0x80];
//! let view = PackedView::rgba(&premul, 1, 1).unwrap().with_alpha_mode(AlphaMode::Premultiplied);
//! let img = adapt(&view).unwrap();
//! assert_eq!(img.pixel(0, 0), [0x7f, 0x3f, 0x00, 0x80]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! tonal-core (this crate)
//!    ^
//!    +-- tonal-lut (byte LUTs and curve builders)
//!    +-- tonal-ops (parallel mapper and operators)
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - [`adapt`] reads rows on the rayon pool
//! - `serde` - Serialization for [`Rect`], [`AlphaMode`] and [`PixelLayout`]
//! - `image` - [`SourceView`] for `image::ImageBuffer<Rgba<u8>, _>` and
//!   `RgbaBuffer::into_rgba_image`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapt;
pub mod buffer;
pub mod error;
pub mod rect;
pub mod source;

#[cfg(feature = "image")]
mod compat;

pub use adapt::{adapt, adapt_sequential, unpremultiply};
pub use buffer::{RgbaBuffer, BYTES_PER_PIXEL};
pub use error::{BoxError, Error, Result};
pub use rect::Rect;
pub use source::{
    from_fn, AlphaMode, FnSource, IndexedView, PackedView, PaletteIndexError, PixelLayout,
    SourceView,
};

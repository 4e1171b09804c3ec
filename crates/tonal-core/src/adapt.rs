//! Source normalization into the canonical buffer.
//!
//! [`adapt`] copies the visible rectangle of any [`SourceView`] into a
//! freshly allocated, tightly packed [`RgbaBuffer`]:
//!
//! - output (0, 0) is the source's bounds origin, whatever that origin is
//! - output stride is exactly `width * 4`, whatever the source stride is
//! - premultiplied sources are converted to straight alpha
//!
//! Rows are read in parallel with the `parallel` feature (default) and on
//! the calling thread without it. The first failing read aborts the whole
//! call.
//!
//! # Example
//!
//! ```rust
//! use tonal_core::{adapt, PackedView, PixelLayout, Rect};
//!
//! let data = [0u8, 0, 0, 255, 0x11, 0x22, 0x33, 0xff];
//! let view = PackedView::new(&data, PixelLayout::Rgba8, 8, Rect::new(-1, -1, 2, 1)).unwrap();
//! let img = adapt(&view).unwrap();
//! assert_eq!(img.dimensions(), (2, 1));
//! assert_eq!(img.pixel(1, 0), [0x11, 0x22, 0x33, 0xff]);
//! ```

use crate::buffer::BYTES_PER_PIXEL;
use crate::error::check_addressable;
use crate::{AlphaMode, BoxError, Error, Result, RgbaBuffer, SourceView};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Copies the visible rectangle of `source` into a new packed buffer.
///
/// Rows are read on the rayon pool when the `parallel` feature is enabled,
/// on the calling thread otherwise.
///
/// # Errors
///
/// - [`Error::Source`] if the source fails to produce a row
/// - [`Error::InvalidDimensions`] if the buffer size overflows or the
///   visible rectangle reaches past the `i32` coordinate range
pub fn adapt<S: SourceView + ?Sized>(source: &S) -> Result<RgbaBuffer> {
    adapt_rows(source, cfg!(feature = "parallel"))
}

/// Same as [`adapt`], but always reads rows on the calling thread.
///
/// # Errors
///
/// Same as [`adapt`].
pub fn adapt_sequential<S: SourceView + ?Sized>(source: &S) -> Result<RgbaBuffer> {
    adapt_rows(source, false)
}

fn adapt_rows<S: SourceView + ?Sized>(source: &S, parallel: bool) -> Result<RgbaBuffer> {
    let bounds = source.bounds();
    let alpha = source.alpha_mode();
    trace!(%bounds, ?alpha, parallel, "adapt");

    check_addressable(bounds)?;
    let mut out = RgbaBuffer::try_new(bounds.width, bounds.height)?;
    if out.is_empty() {
        return Ok(out);
    }

    let stride = out.stride();
    let premultiplied = alpha == AlphaMode::Premultiplied;
    let read = |(row, dst): (usize, &mut [u8])| -> std::result::Result<(), BoxError> {
        let y = i32::try_from(bounds.y as i64 + row as i64)
            .map_err(|_| format!("row {row} is past the i32 coordinate range"))?;
        source.read_row(y, dst)?;
        if premultiplied {
            for px in dst.chunks_exact_mut(BYTES_PER_PIXEL) {
                let straight = unpremultiply([px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&straight);
            }
        }
        Ok(())
    };

    #[cfg(feature = "parallel")]
    let result = if parallel {
        out.data_mut().par_chunks_mut(stride).enumerate().try_for_each(read)
    } else {
        out.data_mut().chunks_mut(stride).enumerate().try_for_each(read)
    };

    #[cfg(not(feature = "parallel"))]
    let result = out.data_mut().chunks_mut(stride).enumerate().try_for_each(read);

    result.map_err(Error::Source)?;

    debug!(width = bounds.width, height = bounds.height, premultiplied, parallel, "Adapted source");
    Ok(out)
}

/// Converts one premultiplied RGBA pixel to straight alpha.
///
/// Fully transparent pixels become `[0, 0, 0, 0]`; opaque pixels pass
/// through; otherwise each color channel is `min(255, c * 255 / a)`,
/// truncated.
///
/// ```rust
/// use tonal_core::unpremultiply;
///
/// assert_eq!(unpremultiply([0x40, 0x20, 0x00, 0x80]), [0x7f, 0x3f, 0x00, 0x80]);
/// assert_eq!(unpremultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
/// ```
#[inline]
pub fn unpremultiply(px: [u8; 4]) -> [u8; 4] {
    let a = px[3];
    match a {
        0 => [0, 0, 0, 0],
        0xff => px,
        _ => {
            let a16 = a as u16;
            let un = |c: u8| ((c as u16 * 0xff) / a16).min(0xff) as u8;
            [un(px[0]), un(px[1]), un(px[2]), a]
        }
    }
}

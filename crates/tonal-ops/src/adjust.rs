//! Tone operators.
//!
//! Each operator adapts its source into a packed [`RgbaBuffer`], builds a
//! lookup table (or uses a direct formula) and maps every pixel on the
//! parallel mapper. The source is never modified; the result is always a
//! new buffer whose dimensions equal the source's visible rectangle.
//!
//! | Operator | Parameters | Identity |
//! |----------|------------|----------|
//! | [`grayscale`] | - | - |
//! | [`invert`] | - | - |
//! | [`adjust_contrast`] | percentage `[-100, 100]` | `0` |
//! | [`adjust_brightness`] | percentage `[-100, 100]` | `0` |
//! | [`adjust_gamma`] | gamma `> 0` | `1` |
//! | [`adjust_sigmoid`] | midpoint `[0, 1]`, factor | factor `0` |
//!
//! Alpha passes through unchanged for every operator above.
//!
//! # Example
//!
//! ```rust
//! use tonal_core::{PackedView, PixelLayout, Rect};
//! use tonal_ops::{adjust_brightness, invert};
//!
//! let data = [0x11, 0x22, 0x33, 0xff];
//! let view = PackedView::new(&data, PixelLayout::Rgba8, 4, Rect::new(-1, -1, 1, 1))?;
//! let out = invert(&adjust_brightness(&view, 10.0)?)?;
//! assert_eq!(out.pixel(0, 0), [0xd4, 0xc3, 0xb2, 0xff]);
//! # Ok::<(), tonal_ops::OpsError>(())
//! ```

use crate::parallel::{map_channels, map_joint, map_pixels, ParallelConfig};
use crate::OpsResult;
use tonal_core::{adapt, RgbaBuffer, SourceView};
use tonal_lut::{curves, quantize, Lut8};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Rec. 601 luma weight for red.
pub const LUMA_R: f64 = 0.299;
/// Rec. 601 luma weight for green.
pub const LUMA_G: f64 = 0.587;
/// Rec. 601 luma weight for blue.
pub const LUMA_B: f64 = 0.114;

/// Rec. 601 luma of a gamma-encoded pixel, rounded half up.
#[inline]
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    quantize(LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64)
}

/// Converts to grayscale: `R = G = B = luma(R, G, B)`.
///
/// Applying it twice gives the same result as applying it once.
pub fn grayscale<S: SourceView + ?Sized>(source: &S) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), "grayscale");
    grayscale_buffer(&img, &ParallelConfig::default())
}

pub(crate) fn grayscale_buffer(img: &RgbaBuffer, config: &ParallelConfig) -> OpsResult<RgbaBuffer> {
    map_joint(img, config, |rgb| {
        let y = luma(rgb);
        [y, y, y]
    })
}

/// Inverts the color channels: `255 - v`.
pub fn invert<S: SourceView + ?Sized>(source: &S) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), "invert");
    map_channels(&img, &ParallelConfig::default(), |v| 255 - v)
}

/// Adjusts contrast by `percentage` (clamped to `[-100, 100]`).
///
/// `-100` flattens every channel to 128; `100` thresholds at 128.
pub fn adjust_contrast<S: SourceView + ?Sized>(source: &S, percentage: f64) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), percentage, "adjust_contrast");
    lut_or_copy(img, &curves::contrast(percentage), &ParallelConfig::default())
}

/// Shifts brightness by `percentage` of the full range (clamped to
/// `[-100, 100]`).
pub fn adjust_brightness<S: SourceView + ?Sized>(
    source: &S,
    percentage: f64,
) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), percentage, "adjust_brightness");
    lut_or_copy(img, &curves::brightness(percentage), &ParallelConfig::default())
}

/// Applies the power curve `255 * (v / 255)^gamma`.
///
/// Gamma below 1 brightens midtones, above 1 darkens them.
///
/// # Errors
///
/// [`OpsError::Validation`](crate::OpsError::Validation) if `gamma <= 0` or
/// NaN. Parameters are checked before the source is read.
pub fn adjust_gamma<S: SourceView + ?Sized>(source: &S, gamma: f64) -> OpsResult<RgbaBuffer> {
    let lut = curves::gamma(gamma)?;
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), gamma, "adjust_gamma");
    lut_or_copy(img, &lut, &ParallelConfig::default())
}

/// Applies a sigmoidal contrast curve centered at `midpoint` (clamped to
/// `[0, 1]`).
///
/// Positive `factor` increases contrast, negative decreases it, and larger
/// magnitudes give steeper curves. `factor == 0` returns a copy.
pub fn adjust_sigmoid<S: SourceView + ?Sized>(
    source: &S,
    midpoint: f64,
    factor: f64,
) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), midpoint, factor, "adjust_sigmoid");
    lut_or_copy(img, &curves::sigmoid(midpoint, factor), &ParallelConfig::default())
}

/// Applies a caller-built lookup table to R, G and B.
///
/// ```rust
/// use tonal_core::RgbaBuffer;
/// use tonal_lut::Lut8;
/// use tonal_ops::apply_lut;
///
/// let posterize = Lut8::from_byte_fn(|v| v & 0xc0);
/// let out = apply_lut(&RgbaBuffer::filled(2, 2, [0x7f, 0xff, 0x01, 0x99]), &posterize)?;
/// assert_eq!(out.pixel(1, 1), [0x40, 0xc0, 0x00, 0x99]);
/// # Ok::<(), tonal_ops::OpsError>(())
/// ```
pub fn apply_lut<S: SourceView + ?Sized>(source: &S, lut: &Lut8) -> OpsResult<RgbaBuffer> {
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), "apply_lut");
    lut_or_copy(img, lut, &ParallelConfig::default())
}

/// Applies an arbitrary per-pixel function to straight-alpha RGBA.
///
/// `f` sees and returns the whole pixel, alpha included.
pub fn adjust_func<S, F>(source: &S, f: F) -> OpsResult<RgbaBuffer>
where
    S: SourceView + ?Sized,
    F: Fn([u8; 4]) -> [u8; 4] + Sync,
{
    let img = adapt(source)?;
    trace!(width = img.width(), height = img.height(), "adjust_func");
    map_pixels(&img, &ParallelConfig::default(), f)
}

/// Maps `img` through `lut`, or hands `img` back when `lut` is the identity.
///
/// `img` is always a fresh buffer from [`adapt`] or a previous operator, so
/// returning it is still a copy of the caller's data.
pub(crate) fn lut_or_copy(
    img: RgbaBuffer,
    lut: &Lut8,
    config: &ParallelConfig,
) -> OpsResult<RgbaBuffer> {
    if lut.is_identity() {
        trace!("identity LUT, returning copy");
        return Ok(img);
    }
    debug!(width = img.width(), height = img.height(), ?lut, "Applying LUT");
    map_channels(&img, config, |v| lut.apply(v))
}

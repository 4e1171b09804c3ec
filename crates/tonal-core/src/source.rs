//! Read-only source image capabilities.
//!
//! A [`SourceView`] is all the adapter needs to know about a caller's image:
//! its visible rectangle, whether its color channels are premultiplied, and
//! a per-pixel RGBA accessor. Storage may be anything: a strided sub-image,
//! a paletted buffer, a lazily decoded scanline cache.
//!
//! # Provided views
//!
//! - [`PackedView`] - Borrowed interleaved 8-bit data with arbitrary stride
//! - [`IndexedView`] - Paletted 8-bit indices
//! - [`FnSource`] - Closure-backed synthetic source ([`from_fn`])
//! - [`RgbaBuffer`] - Canonical buffers are sources too, so operators chain
//!
//! # Example
//!
//! ```rust
//! use tonal_core::{PackedView, PixelLayout, Rect, SourceView};
//!
//! // 2x1 RGB image whose visible rectangle starts at (-1, 5)
//! let data = [10, 20, 30, 40, 50, 60];
//! let view = PackedView::new(&data, PixelLayout::Rgb8, 6, Rect::new(-1, 5, 2, 1)).unwrap();
//! assert_eq!(view.read_pixel(0, 5).unwrap(), [40, 50, 60, 255]);
//! ```

use crate::buffer::BYTES_PER_PIXEL;
use crate::error::{check_addressable, checked_len, packed_stride};
use crate::{BoxError, Error, Rect, Result, RgbaBuffer};
use thiserror::Error;

/// How a source stores color relative to alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlphaMode {
    /// Color channels are independent of alpha.
    #[default]
    Straight,
    /// Color channels are pre-scaled by alpha.
    Premultiplied,
}

/// Read-only view over a caller's image.
///
/// Implementors must answer [`read_pixel`](Self::read_pixel) for every
/// coordinate inside [`bounds`](Self::bounds). Returned bytes are in the
/// source's native [`AlphaMode`]; the adapter un-premultiplies when needed.
///
/// Views are read from several threads at once, hence the `Sync` bound.
pub trait SourceView: Sync {
    /// The visible rectangle, in the source's own coordinates.
    fn bounds(&self) -> Rect;

    /// Alpha convention of the bytes returned by the accessors.
    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Straight
    }

    /// Returns the RGBA bytes at (x, y). Only called with in-bounds coordinates.
    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError>;

    /// Reads visible row `y` into `out` (`width * 4` bytes).
    ///
    /// The default implementation calls [`read_pixel`](Self::read_pixel)
    /// for every column; contiguous sources override it with a copy.
    fn read_row(&self, y: i32, out: &mut [u8]) -> std::result::Result<(), BoxError> {
        let x0 = self.bounds().x;
        for (i, px) in out.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let x = i32::try_from(x0 as i64 + i as i64)
                .map_err(|_| format!("column {i} of row {y} is past the i32 coordinate range"))?;
            px.copy_from_slice(&self.read_pixel(x, y)?);
        }
        Ok(())
    }
}

impl<T: SourceView + ?Sized> SourceView for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn alpha_mode(&self) -> AlphaMode {
        (**self).alpha_mode()
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        (**self).read_pixel(x, y)
    }

    fn read_row(&self, y: i32, out: &mut [u8]) -> std::result::Result<(), BoxError> {
        (**self).read_row(y, out)
    }
}

impl SourceView for RgbaBuffer {
    fn bounds(&self) -> Rect {
        RgbaBuffer::bounds(self)
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        Ok(self.pixel(x as u32, y as u32))
    }

    fn read_row(&self, y: i32, out: &mut [u8]) -> std::result::Result<(), BoxError> {
        out.copy_from_slice(self.row(y as u32));
        Ok(())
    }
}

/// Interleaved 8-bit pixel layouts understood by [`PackedView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PixelLayout {
    /// R, G, B, A
    Rgba8,
    /// B, G, R, A
    Bgra8,
    /// R, G, B (opaque)
    Rgb8,
    /// Single luminance byte (opaque)
    Gray8,
    /// Luminance, alpha
    GrayAlpha8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 | Self::Bgra8 => 4,
            Self::Rgb8 => 3,
            Self::Gray8 => 1,
            Self::GrayAlpha8 => 2,
        }
    }

    /// Expands one pixel of this layout to RGBA.
    #[inline]
    fn to_rgba(self, p: &[u8]) -> [u8; 4] {
        match self {
            Self::Rgba8 => [p[0], p[1], p[2], p[3]],
            Self::Bgra8 => [p[2], p[1], p[0], p[3]],
            Self::Rgb8 => [p[0], p[1], p[2], 0xff],
            Self::Gray8 => [p[0], p[0], p[0], 0xff],
            Self::GrayAlpha8 => [p[0], p[0], p[0], p[1]],
        }
    }
}

/// Borrowed interleaved pixel data with an arbitrary row stride.
///
/// `data[0]` is the first byte of the pixel at the bounds origin; pixel
/// (x, y) starts at `(y - bounds.y) * stride + (x - bounds.x) * bpp`.
#[derive(Debug, Clone, Copy)]
pub struct PackedView<'a> {
    data: &'a [u8],
    layout: PixelLayout,
    stride: usize,
    bounds: Rect,
    alpha: AlphaMode,
}

impl<'a> PackedView<'a> {
    /// Creates a view over `data`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `bounds` reaches past the `i32`
    ///   coordinate range
    /// - [`Error::InvalidStride`] if `stride` is narrower than a row
    /// - [`Error::BufferTooSmall`] if `data` cannot hold every visible row
    pub fn new(data: &'a [u8], layout: PixelLayout, stride: usize, bounds: Rect) -> Result<Self> {
        check_addressable(bounds)?;
        let (w, h) = (bounds.width, bounds.height);
        let row_len = (w as usize)
            .checked_mul(layout.bytes_per_pixel())
            .ok_or_else(|| Error::invalid_dimensions(w, h, "row size overflows usize"))?;
        if stride < row_len {
            return Err(Error::invalid_stride(stride, row_len, w));
        }
        if !bounds.is_empty() {
            // Last row only needs its visible bytes.
            let required = checked_len(w, h - 1, stride)?
                .checked_add(row_len)
                .ok_or_else(|| Error::invalid_dimensions(w, h, "buffer size overflows usize"))?;
            if data.len() < required {
                return Err(Error::buffer_too_small(required, data.len()));
            }
        }
        Ok(Self {
            data,
            layout,
            stride,
            bounds,
            alpha: AlphaMode::Straight,
        })
    }

    /// Creates a tightly packed RGBA view with its origin at (0, 0).
    pub fn rgba(data: &'a [u8], width: u32, height: u32) -> Result<Self> {
        let stride = packed_stride(width, height)?;
        Self::new(data, PixelLayout::Rgba8, stride, Rect::from_size(width, height))
    }

    /// Declares the alpha convention of the data.
    #[must_use]
    pub fn with_alpha_mode(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns the pixel layout.
    #[inline]
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Returns the row stride in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns a view of the part of `rect` that overlaps this view.
    ///
    /// The sub-view keeps the parent's coordinates and stride, so its rows
    /// are usually wider than its visible width. Returns `None` when there
    /// is no overlap.
    ///
    /// ```rust
    /// use tonal_core::{PackedView, Rect, SourceView};
    ///
    /// let data: Vec<u8> = (0..64).collect();
    /// let view = PackedView::rgba(&data, 4, 4).unwrap();
    /// let sub = view.sub_view(Rect::new(1, 2, 2, 2)).unwrap();
    /// assert_eq!(sub.bounds(), Rect::new(1, 2, 2, 2));
    /// assert_eq!(sub.read_pixel(1, 2).unwrap(), [36, 37, 38, 39]);
    /// ```
    pub fn sub_view(&self, rect: Rect) -> Option<PackedView<'a>> {
        let r = self.bounds.intersect(&rect)?;
        let start = self.offset(r.x, r.y);
        Some(PackedView {
            data: &self.data[start..],
            layout: self.layout,
            stride: self.stride,
            bounds: r,
            alpha: self.alpha,
        })
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> usize {
        let dx = (x as i64 - self.bounds.x as i64) as usize;
        let dy = (y as i64 - self.bounds.y as i64) as usize;
        dy * self.stride + dx * self.layout.bytes_per_pixel()
    }
}

impl SourceView for PackedView<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        let bpp = self.layout.bytes_per_pixel();
        let o = self.offset(x, y);
        Ok(self.layout.to_rgba(&self.data[o..o + bpp]))
    }

    fn read_row(&self, y: i32, out: &mut [u8]) -> std::result::Result<(), BoxError> {
        let bpp = self.layout.bytes_per_pixel();
        let start = self.offset(self.bounds.x, y);
        let src = &self.data[start..start + self.bounds.width as usize * bpp];
        if self.layout == PixelLayout::Rgba8 {
            out.copy_from_slice(src);
        } else {
            for (d, s) in out.chunks_exact_mut(BYTES_PER_PIXEL).zip(src.chunks_exact(bpp)) {
                d.copy_from_slice(&self.layout.to_rgba(s));
            }
        }
        Ok(())
    }
}

/// A palette index that has no palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("palette index {index} at ({x}, {y}) out of range for {len} entries")]
pub struct PaletteIndexError {
    /// Offending index
    pub index: u8,
    /// Palette length
    pub len: usize,
    /// X coordinate of the pixel
    pub x: i32,
    /// Y coordinate of the pixel
    pub y: i32,
}

/// Paletted 8-bit source. Palette entries are straight RGBA.
#[derive(Debug, Clone, Copy)]
pub struct IndexedView<'a> {
    indices: &'a [u8],
    palette: &'a [[u8; 4]],
    stride: usize,
    bounds: Rect,
}

impl<'a> IndexedView<'a> {
    /// Creates a paletted view; `indices[0]` is the bounds origin.
    ///
    /// # Errors
    ///
    /// Same geometry checks as [`PackedView::new`].
    pub fn new(
        indices: &'a [u8],
        palette: &'a [[u8; 4]],
        stride: usize,
        bounds: Rect,
    ) -> Result<Self> {
        // Reuse the packed geometry checks with a one-byte layout.
        PackedView::new(indices, PixelLayout::Gray8, stride, bounds)?;
        Ok(Self {
            indices,
            palette,
            stride,
            bounds,
        })
    }
}

impl SourceView for IndexedView<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        let dx = (x as i64 - self.bounds.x as i64) as usize;
        let dy = (y as i64 - self.bounds.y as i64) as usize;
        let index = self.indices[dy * self.stride + dx];
        self.palette.get(index as usize).copied().ok_or_else(|| {
            PaletteIndexError {
                index,
                len: self.palette.len(),
                x,
                y,
            }
            .into()
        })
    }
}

/// Source backed by a closure `(x, y) -> RGBA`.
///
/// Created with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnSource<F> {
    bounds: Rect,
    alpha: AlphaMode,
    f: F,
}

/// Creates a straight-alpha source whose pixels come from `f`.
///
/// ```rust
/// use tonal_core::{from_fn, Rect, SourceView};
///
/// let ramp = from_fn(Rect::from_size(256, 1), |x, _| [x as u8, x as u8, x as u8, 255]);
/// assert_eq!(ramp.read_pixel(7, 0).unwrap(), [7, 7, 7, 255]);
/// ```
pub fn from_fn<F>(bounds: Rect, f: F) -> FnSource<F>
where
    F: Fn(i32, i32) -> [u8; 4] + Sync,
{
    FnSource {
        bounds,
        alpha: AlphaMode::Straight,
        f,
    }
}

impl<F> FnSource<F> {
    /// Declares the alpha convention of the generated pixels.
    #[must_use]
    pub fn with_alpha_mode(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }
}

impl<F> SourceView for FnSource<F>
where
    F: Fn(i32, i32) -> [u8; 4] + Sync,
{
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        Ok((self.f)(x, y))
    }
}

impl<F> std::fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource")
            .field("bounds", &self.bounds)
            .field("alpha", &self.alpha)
            .finish()
    }
}

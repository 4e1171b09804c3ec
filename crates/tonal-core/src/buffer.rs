//! The canonical RGBA8 buffer.
//!
//! Every operator reads an [`RgbaBuffer`] and produces a new one.
//!
//! # Memory Layout
//!
//! Pixels are stored row-major, top-to-bottom, four bytes per pixel in
//! R, G, B, A order with straight (non-premultiplied) alpha:
//!
//! ```text
//! Row 0: [R G B A R G B A ... (padding)]  ← stride bytes
//! Row 1: [R G B A R G B A ... (padding)]
//! ```
//!
//! Pixel (x, y) lives at `y * stride + x * 4`. Buffers produced by
//! [`adapt`](crate::adapt) are tightly packed (`stride == width * 4`).
//!
//! # Usage
//!
//! ```rust
//! use tonal_core::RgbaBuffer;
//!
//! let mut img = RgbaBuffer::new(4, 2);
//! img.set_pixel(1, 1, [0x11, 0x22, 0x33, 0xff]);
//! assert_eq!(img.pixel(1, 1), [0x11, 0x22, 0x33, 0xff]);
//! assert_eq!(img.stride(), 16);
//! ```

use crate::error::{checked_len, packed_stride};
use crate::{Error, Rect, Result};

/// Bytes per canonical pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Owned, non-premultiplied RGBA8 pixel buffer.
///
/// The buffer is never shared between an operator's input and output:
/// every operator allocates its result.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct RgbaBuffer {
    /// Pixel bytes, `stride * height` long
    data: Vec<u8>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row (may include padding)
    stride: usize,
}

impl RgbaBuffer {
    /// Creates a tightly packed buffer filled with transparent black.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`. Use
    /// [`try_new`](Self::try_new) for untrusted dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * BYTES_PER_PIXEL;
        Self {
            data: vec![0; stride * height as usize],
            width,
            height,
            stride,
        }
    }

    /// Creates a tightly packed zeroed buffer, checking the size for overflow.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        let stride = packed_stride(width, height)?;
        Self::try_with_stride(width, height, stride)
    }

    /// Creates a zeroed buffer with an explicit row stride.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride < width * 4`
    /// - [`Error::InvalidDimensions`] if the size overflows
    pub fn try_with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        let min_stride = packed_stride(width, height)?;
        if stride < min_stride {
            return Err(Error::invalid_stride(stride, min_stride, width));
        }
        let len = checked_len(width, height, stride)?;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
            stride,
        })
    }

    /// Creates a tightly packed buffer from existing RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * 4`.
    ///
    /// ```rust
    /// use tonal_core::RgbaBuffer;
    ///
    /// let img = RgbaBuffer::from_data(1, 1, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(img.pixel(0, 0), [1, 2, 3, 4]);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let stride = packed_stride(width, height)?;
        let expected = checked_len(width, height, stride)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a buffer from RGBA bytes laid out with a custom stride.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStride`] if `stride < width * 4`
    /// - [`Error::InvalidDimensions`] if `data.len() != stride * height`
    pub fn from_data_with_stride(
        width: u32,
        height: u32,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        let min_stride = packed_stride(width, height)?;
        if stride < min_stride {
            return Err(Error::invalid_stride(stride, min_stride, width));
        }
        let expected = checked_len(width, height, stride)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a tightly packed buffer with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Self {
        let mut img = Self::new(width, height);
        img.fill(pixel);
        img
    }

    /// Returns the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the stride (bytes per row).
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns `true` if rows carry no padding.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.stride == self.width as usize * BYTES_PER_PIXEL
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns a rectangle covering the whole buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw bytes, including row padding.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw bytes mutably, including row padding.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer and returns its raw bytes (padding included).
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Consumes the buffer and returns tightly packed RGBA bytes.
    ///
    /// No copy is made when the buffer is already packed.
    pub fn into_packed(self) -> Vec<u8> {
        if self.is_packed() {
            return self.data;
        }
        let row_len = self.width as usize * BYTES_PER_PIXEL;
        let mut packed = Vec::with_capacity(row_len * self.height as usize);
        for y in 0..self.height {
            packed.extend_from_slice(self.row(y));
        }
        packed
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize * BYTES_PER_PIXEL
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.pixel_offset(x, y);
        self.data[o..o + BYTES_PER_PIXEL].copy_from_slice(&pixel);
    }

    /// Fills every pixel with `pixel`. Padding is left untouched.
    pub fn fill(&mut self, pixel: [u8; 4]) {
        for y in 0..self.height {
            for chunk in self.row_mut(y).chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&pixel);
            }
        }
    }

    /// Returns the visible bytes of row `y` (`width * 4` bytes, no padding).
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Returns the visible bytes of row `y` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.stride;
        let end = start + self.width as usize * BYTES_PER_PIXEL;
        &mut self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }
}

impl std::fmt::Debug for RgbaBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish()
    }
}

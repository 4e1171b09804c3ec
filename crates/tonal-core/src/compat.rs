//! Interop with the `image` crate (feature `image`).
//!
//! `image::ImageBuffer<Rgba<u8>, _>` is a straight-alpha [`SourceView`], and
//! finished buffers convert back into `image::RgbaImage` for encoding.

use crate::buffer::BYTES_PER_PIXEL;
use crate::{BoxError, Error, Rect, Result, RgbaBuffer, SourceView};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::ops::Deref;

impl<C> SourceView for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]> + Sync,
{
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    fn read_pixel(&self, x: i32, y: i32) -> std::result::Result<[u8; 4], BoxError> {
        Ok(self.get_pixel(x as u32, y as u32).0)
    }

    fn read_row(&self, y: i32, out: &mut [u8]) -> std::result::Result<(), BoxError> {
        let row_len = self.width() as usize * BYTES_PER_PIXEL;
        let start = y as usize * row_len;
        let raw: &[u8] = self.as_raw();
        out.copy_from_slice(&raw[start..start + row_len]);
        Ok(())
    }
}

impl RgbaBuffer {
    /// Converts into an `image::RgbaImage`, dropping any row padding.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if the packed data does not cover
    /// `width * height` pixels, which means the buffer was corrupted.
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        let required = width as usize * BYTES_PER_PIXEL * height as usize;
        let packed = self.into_packed();
        let actual = packed.len();
        RgbaImage::from_raw(width, height, packed)
            .ok_or_else(|| Error::buffer_too_small(required, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapt;

    #[test]
    fn test_image_buffer_roundtrip_through_adapt() {
        let mut src = RgbaImage::new(3, 2);
        src.put_pixel(2, 1, Rgba([1, 2, 3, 4]));
        let buf = adapt(&src).unwrap();
        assert_eq!(buf.pixel(2, 1), [1, 2, 3, 4]);

        let back = buf.into_rgba_image().unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn test_into_rgba_image_drops_padding() {
        let mut data = vec![0xee; 12 * 2];
        data[0..8].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        data[12..20].copy_from_slice(&[9, 10, 11, 12, 13, 14, 15, 16]);
        let buf = RgbaBuffer::from_data_with_stride(2, 2, 12, data).unwrap();

        let img = buf.into_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.as_raw().as_slice(), &(1..=16).collect::<Vec<u8>>()[..]);
    }

    #[test]
    fn test_into_rgba_image_empty() {
        let img = RgbaBuffer::new(0, 3).into_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (0, 3));
    }
}

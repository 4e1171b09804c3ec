//! Row-parallel pixel mapping.
//!
//! Every operator ends up here: the input buffer's rows are split into
//! contiguous chunks, each chunk is mapped on the rayon pool into the
//! matching rows of a freshly allocated output, and the call returns once
//! all chunks are done. Pixels are independent, so the result is
//! byte-identical for any worker count.
//!
//! Three granularities are offered:
//!
//! - [`map_channels`] - `u8 -> u8` applied to R, G and B; alpha copied
//! - [`map_joint`] - `[u8; 3] -> [u8; 3]` on the color triple; alpha copied
//! - [`map_pixels`] - `[u8; 4] -> [u8; 4]` on the whole pixel
//!
//! Without the `parallel` feature, or when the image fits in one chunk, the
//! chunks run one after another on the calling thread.
//!
//! # Example
//!
//! ```rust
//! use tonal_core::RgbaBuffer;
//! use tonal_ops::parallel::{map_channels, ParallelConfig};
//!
//! let img = RgbaBuffer::filled(64, 64, [10, 20, 30, 40]);
//! let out = map_channels(&img, &ParallelConfig::default(), |v| v * 2).unwrap();
//! assert_eq!(out.pixel(63, 63), [20, 40, 60, 40]);
//! ```

use crate::OpsResult;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tonal_core::{adapt, adapt_sequential, RgbaBuffer, SourceView, BYTES_PER_PIXEL};
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Work-splitting settings for the mapper.
///
/// ```rust
/// use tonal_ops::ParallelConfig;
///
/// let cfg = ParallelConfig::default().with_workers(3);
/// assert_eq!(cfg.chunk_rows(10), 4); // chunks of 4, 4, 2
/// assert_eq!(cfg.chunk_rows(2), 1); // never more chunks than rows
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Number of row chunks to aim for. `None` uses every thread of the
    /// current rayon pool.
    pub workers: Option<usize>,
    /// Lower bound on rows per chunk.
    pub min_rows_per_task: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            workers: None,
            min_rows_per_task: 1,
        }
    }
}

impl ParallelConfig {
    /// One chunk covering the whole image.
    pub fn sequential() -> Self {
        Self {
            workers: Some(1),
            ..Self::default()
        }
    }

    /// Sets the worker count.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the minimum number of rows per chunk.
    #[must_use]
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows;
        self
    }

    /// Worker count after applying the default; never zero.
    pub fn resolved_workers(&self) -> usize {
        self.workers.unwrap_or_else(default_workers).max(1)
    }

    /// Rows per chunk for an image of `height` rows.
    ///
    /// The image is cut into at most `min(height, workers)` chunks of equal
    /// size (the last may be shorter), each at least `min_rows_per_task`
    /// rows long.
    pub fn chunk_rows(&self, height: usize) -> usize {
        let chunks = self.resolved_workers().min(height).max(1);
        height.div_ceil(chunks).max(self.min_rows_per_task).max(1)
    }
}

#[cfg(feature = "parallel")]
fn default_workers() -> usize {
    rayon::current_num_threads()
}

#[cfg(not(feature = "parallel"))]
fn default_workers() -> usize {
    1
}

/// Applies `f` to the R, G and B bytes of every pixel. Alpha is copied.
pub fn map_channels<F>(input: &RgbaBuffer, config: &ParallelConfig, f: F) -> OpsResult<RgbaBuffer>
where
    F: Fn(u8) -> u8 + Sync,
{
    map_rows(input, config, |src, dst| {
        for (s, d) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            d[0] = f(s[0]);
            d[1] = f(s[1]);
            d[2] = f(s[2]);
            d[3] = s[3];
        }
    })
}

/// Applies `f` to the `[r, g, b]` triple of every pixel. Alpha is copied.
pub fn map_joint<F>(input: &RgbaBuffer, config: &ParallelConfig, f: F) -> OpsResult<RgbaBuffer>
where
    F: Fn([u8; 3]) -> [u8; 3] + Sync,
{
    map_rows(input, config, |src, dst| {
        for (s, d) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            let [r, g, b] = f([s[0], s[1], s[2]]);
            d.copy_from_slice(&[r, g, b, s[3]]);
        }
    })
}

/// Applies `f` to every `[r, g, b, a]` pixel, alpha included.
pub fn map_pixels<F>(input: &RgbaBuffer, config: &ParallelConfig, f: F) -> OpsResult<RgbaBuffer>
where
    F: Fn([u8; 4]) -> [u8; 4] + Sync,
{
    map_rows(input, config, |src, dst| {
        for (s, d) in src
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
        {
            d.copy_from_slice(&f([s[0], s[1], s[2], s[3]]));
        }
    })
}

/// Adapts `source`, on the calling thread when `config` resolves to a
/// single worker.
pub(crate) fn adapt_with<S: SourceView + ?Sized>(
    source: &S,
    config: &ParallelConfig,
) -> OpsResult<RgbaBuffer> {
    let img = if config.resolved_workers() == 1 {
        adapt_sequential(source)?
    } else {
        adapt(source)?
    };
    Ok(img)
}

/// Drives `row_fn(src_row, dst_row)` over every row, where both slices
/// cover only the visible `width * 4` bytes. Output padding stays zero.
fn map_rows<F>(input: &RgbaBuffer, config: &ParallelConfig, row_fn: F) -> OpsResult<RgbaBuffer>
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    let (width, height) = input.dimensions();
    let stride = input.stride();
    let mut out = RgbaBuffer::try_with_stride(width, height, stride)?;
    if out.is_empty() {
        return Ok(out);
    }

    let row_len = width as usize * BYTES_PER_PIXEL;
    let rows = config.chunk_rows(height as usize);
    // rows <= height, and stride * height already fits.
    let chunk_len = rows.min(height as usize) * stride;
    trace!(width, height, stride, rows, "map_rows chunking");

    let map_chunk = |(dst, src): (&mut [u8], &[u8])| {
        for (d, s) in dst.chunks_mut(stride).zip(src.chunks(stride)) {
            row_fn(&s[..row_len], &mut d[..row_len]);
        }
    };

    // A single chunk runs on the calling thread.
    #[cfg(feature = "parallel")]
    let parallel = rows < height as usize;
    #[cfg(not(feature = "parallel"))]
    let parallel = false;

    if parallel {
        #[cfg(feature = "parallel")]
        out.data_mut()
            .par_chunks_mut(chunk_len)
            .zip(input.data().par_chunks(chunk_len))
            .for_each(map_chunk);
    } else {
        out.data_mut()
            .chunks_mut(chunk_len)
            .zip(input.data().chunks(chunk_len))
            .for_each(map_chunk);
    }

    Ok(out)
}

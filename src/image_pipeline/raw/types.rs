//! Raster data types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Samples per pixel, always R, G, B in that order.
pub const CHANNELS: usize = 3;

/// Interleaved 8-bit RGB image.
///
/// The buffer always holds exactly `width * height * 3` bytes, row-major,
/// with the three channel samples of a pixel stored next to each other.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wraps an interleaved buffer, rejecting empty dimensions or a length mismatch.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidDimensions(width, height));
        }
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(PipelineError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Raster with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        Self::new(width, height, vec![value; len])
    }

    fn byte_len(width: usize, height: usize) -> Result<usize> {
        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(PipelineError::InvalidDimensions(width, height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Sample at `(x, y)` for `channel` (0 = R, 1 = G, 2 = B).
    #[inline]
    pub fn sample(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[(y * self.width + x) * CHANNELS + channel]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterates one channel's samples in pixel order.
    pub fn channel(&self, channel: usize) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().skip(channel).step_by(CHANNELS).copied()
    }

    /// Hands the buffer to the caller; the raster is gone afterwards.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

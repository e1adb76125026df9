//! Reader for headerless planar RGB files.
//!
//! The file is three back-to-back planes of `width * height` bytes each,
//! red first, then green, then blue. There is no header, so the dimensions
//! have to come from the caller.

use std::io::Read;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::raw::reader::RasterReader;
use crate::image_pipeline::raw::types::{CHANNELS, Raster};

/// Width and height of the classic test images this format ships with.
pub const DEFAULT_DIMENSION: usize = 512;

const PLANE_NAMES: [&str; CHANNELS] = ["red", "green", "blue"];

/// Decodes planar RGB into an interleaved [`Raster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanarRgbReader {
    width: usize,
    height: usize,
}

impl Default for PlanarRgbReader {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION, DEFAULT_DIMENSION)
    }
}

impl PlanarRgbReader {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

impl RasterReader for PlanarRgbReader {
    /// Reads exactly one plane per channel and interleaves them.
    ///
    /// A short read on any plane fails with [`PipelineError::Io`]
    /// (`UnexpectedEof`); nothing is zero-filled. Bytes beyond the third
    /// plane are left unread.
    fn read_raster(&self, input: &mut dyn Read) -> Result<Raster> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidDimensions(self.width, self.height));
        }
        let plane_len = self
            .width
            .checked_mul(self.height)
            .ok_or(PipelineError::InvalidDimensions(self.width, self.height))?;
        let total_len = plane_len
            .checked_mul(CHANNELS)
            .ok_or(PipelineError::InvalidDimensions(self.width, self.height))?;

        let mut data = vec![0u8; total_len];
        let mut plane = vec![0u8; plane_len];

        for (channel, name) in PLANE_NAMES.iter().enumerate() {
            input.read_exact(&mut plane)?;
            debug!("Read {} plane, {} bytes", name, plane_len);

            for (pixel, &value) in data.chunks_exact_mut(CHANNELS).zip(plane.iter()) {
                pixel[channel] = value;
            }
        }

        Raster::new(self.width, self.height, data)
    }
}

use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::output::writer::RasterWriter;
use crate::image_pipeline::raw::types::{CHANNELS, Raster};

/// Writes the headerless R, G, B plane layout that `PlanarRgbReader` reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarRgbWriter;

impl RasterWriter for PlanarRgbWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!("Writing planar RGB: {}x{}", raster.width(), raster.height());

        let mut plane = Vec::with_capacity(raster.pixel_count());
        for channel in 0..CHANNELS {
            plane.clear();
            plane.extend(raster.channel(channel));
            output.write_all(&plane)?;
        }
        Ok(())
    }
}

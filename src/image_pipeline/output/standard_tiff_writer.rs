use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::output::types::{TiffCompression, TiffPredictor};
use crate::image_pipeline::output::writer::RasterWriter;
use crate::image_pipeline::raw::types::Raster;

/// Writes 8-bit RGB TIFF files.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTiffWriter {
    compression: TiffCompression,
    predictor: TiffPredictor,
}

impl StandardTiffWriter {
    pub fn new(compression: TiffCompression, predictor: TiffPredictor) -> Self {
        Self { compression, predictor }
    }

    pub fn compression(&self) -> TiffCompression {
        self.compression
    }
}

impl RasterWriter for StandardTiffWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", raster.width(), raster.height());

        // The encoder needs Seek, so build the file in memory first
        let mut buffer = Vec::new();

        let compression = match self.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Balanced,
            ),
        };

        let predictor = match self.predictor {
            TiffPredictor::None => tiff::tags::Predictor::None,
            TiffPredictor::Horizontal => tiff::tags::Predictor::Horizontal,
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression)
            .with_predictor(predictor);

        encoder
            .write_image::<tiff::encoder::colortype::RGB8>(
                raster.width() as u32,
                raster.height() as u32,
                raster.as_bytes(),
            )
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

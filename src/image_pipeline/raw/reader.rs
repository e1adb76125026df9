use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::Raster;

pub trait RasterReader {
    fn read_raster(&self, input: &mut dyn Read) -> Result<Raster>;
}

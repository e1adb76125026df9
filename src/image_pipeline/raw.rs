//! Raster decoding module
//!
//! Holds the in-memory raster type and readers that produce it.

mod reader;
mod planar_reader;
pub mod types;

pub use reader::RasterReader;
pub use planar_reader::{PlanarRgbReader, DEFAULT_DIMENSION};
pub use types::{Raster, CHANNELS};

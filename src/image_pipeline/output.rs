//! Output encoding module
//!
//! Writers that hand a finished raster to a file or stream.

mod writer;
mod standard_tiff_writer;
mod planar_writer;
pub mod types;

pub use writer::RasterWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use planar_writer::PlanarRgbWriter;
pub use types::{TiffCompression, TiffPredictor};

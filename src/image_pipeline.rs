//! Image resampling and quantization pipeline
//!
//! Raw planar RGB input is decoded into an interleaved raster, resampled with a
//! 3x3 box filter, and quantized per channel under one of three strategies.

pub mod common;
pub mod raw;
pub mod sampling;
pub mod quantize;
pub mod metrics;
pub mod output;
pub mod conversions;

pub use common::{
    PipelineError,
    Result,
};

pub use raw::{
    Raster,
    RasterReader,
    PlanarRgbReader,
    CHANNELS,
};

pub use quantize::{
    ChannelQuantizer,
    QuantizationMode,
    Quantizer,
    UniformQuantizer,
    LogPivotQuantizer,
    OptimalQuantizer,
};

pub use metrics::FidelityMetrics;

pub use output::{
    RasterWriter,
    StandardTiffWriter,
    PlanarRgbWriter,
    TiffCompression,
    TiffPredictor,
};

pub use conversions::{
    PipelineConfig,
    PipelineConfigBuilder,
    PipelineOutput,
    QuantizePipeline,
};

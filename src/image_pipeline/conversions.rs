//! Pipeline orchestration module
//!
//! Ties decoding, resampling and quantization together for one request.

mod types;
mod quantize_pipeline;


pub use types::{PipelineConfig, PipelineConfigBuilder, PipelineOutput, MAX_TOTAL_BITS, MIN_TOTAL_BITS};
pub use quantize_pipeline::QuantizePipeline;

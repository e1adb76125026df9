use tracing::debug;

use crate::image_pipeline::quantize::log_pivot::LogPivotQuantizer;
use crate::image_pipeline::quantize::optimal::OptimalQuantizer;
use crate::image_pipeline::quantize::types::QuantizationMode;
use crate::image_pipeline::quantize::uniform::UniformQuantizer;
use crate::image_pipeline::raw::types::Raster;

/// Maps an 8-bit channel sample onto a reconstructed representative.
///
/// Implementations are built once per run and only read afterwards, so the
/// pipeline shares them across worker threads.
pub trait ChannelQuantizer: Sync {
    fn quantize(&self, value: u8, channel: usize) -> u8;

    /// Representative values in ascending index order for `channel`.
    fn representatives(&self, channel: usize) -> &[u8];
}

/// The quantizer chosen for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quantizer {
    Uniform(UniformQuantizer),
    LogPivot(LogPivotQuantizer),
    Optimal(OptimalQuantizer),
}

impl Quantizer {
    /// Builds the levels for `mode`. Only the optimal quantizer looks at `input`.
    pub fn build(mode: QuantizationMode, bits_per_channel: u32, input: &Raster) -> Self {
        let quantizer = match mode {
            QuantizationMode::Uniform => Self::Uniform(UniformQuantizer::new(bits_per_channel)),
            QuantizationMode::LogPivot(pivot) => {
                Self::LogPivot(LogPivotQuantizer::new(pivot, bits_per_channel))
            }
            QuantizationMode::Optimal => {
                Self::Optimal(OptimalQuantizer::train(input, bits_per_channel))
            }
        };
        debug!(%mode, bits_per_channel, levels = ?quantizer.representatives(0), "Quantizer built");
        quantizer
    }

    pub fn mode(&self) -> QuantizationMode {
        match self {
            Self::Uniform(_) => QuantizationMode::Uniform,
            Self::LogPivot(q) => QuantizationMode::LogPivot(q.pivot()),
            Self::Optimal(_) => QuantizationMode::Optimal,
        }
    }
}

impl ChannelQuantizer for Quantizer {
    fn quantize(&self, value: u8, channel: usize) -> u8 {
        match self {
            Self::Uniform(q) => q.quantize(value, channel),
            Self::LogPivot(q) => q.quantize(value, channel),
            Self::Optimal(q) => q.quantize(value, channel),
        }
    }

    fn representatives(&self, channel: usize) -> &[u8] {
        match self {
            Self::Uniform(q) => q.representatives(channel),
            Self::LogPivot(q) => q.representatives(channel),
            Self::Optimal(q) => q.representatives(channel),
        }
    }
}

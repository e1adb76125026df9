//! Pipeline configuration and result types

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::metrics::FidelityMetrics;
use crate::image_pipeline::quantize::QuantizationMode;
use crate::image_pipeline::raw::types::{CHANNELS, Raster};

pub const MIN_TOTAL_BITS: u32 = 1;
pub const MAX_TOTAL_BITS: u32 = 24;

/// Parameters of one resample-and-quantize run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Output size relative to input, in (0, 1]
    pub scale: f32,
    /// Bits across all three channels, in [1, 24]
    pub total_bits: u32,
    /// Quantization strategy
    pub mode: QuantizationMode,
    /// Allows a bit budget that does not divide by three.
    /// The split stays equal either way.
    pub extra_credit: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            total_bits: MAX_TOTAL_BITS,
            mode: QuantizationMode::Uniform,
            extra_credit: false,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Rejects anything the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(PipelineError::InvalidScale(self.scale));
        }
        if !(MIN_TOTAL_BITS..=MAX_TOTAL_BITS).contains(&self.total_bits) {
            return Err(PipelineError::InvalidQuantizationBits(self.total_bits));
        }
        if !self.extra_credit && self.total_bits % CHANNELS as u32 != 0 {
            return Err(PipelineError::UnevenBitSplit(self.total_bits));
        }
        Ok(())
    }

    /// Equal share of the bit budget per channel, remainder dropped.
    // TODO: uneven per-channel split for extra_credit budgets; remainder bits are unused today
    pub fn bits_per_channel(&self) -> u32 {
        self.total_bits / CHANNELS as u32
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    scale: Option<f32>,
    total_bits: Option<u32>,
    mode: Option<QuantizationMode>,
    extra_credit: Option<bool>,
}

impl PipelineConfigBuilder {
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn total_bits(mut self, bits: u32) -> Self {
        self.total_bits = Some(bits);
        self
    }

    pub fn mode(mut self, mode: QuantizationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn extra_credit(mut self, enable: bool) -> Self {
        self.extra_credit = Some(enable);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            scale: self.scale.unwrap_or(default.scale),
            total_bits: self.total_bits.unwrap_or(default.total_bits),
            mode: self.mode.unwrap_or(default.mode),
            extra_credit: self.extra_credit.unwrap_or(default.extra_credit),
        }
    }
}

/// Result of a pipeline run. Owns the output raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub(crate) raster: Raster,
    pub(crate) metrics: Option<FidelityMetrics>,
}

impl PipelineOutput {
    pub fn width(&self) -> usize {
        self.raster.width()
    }

    pub fn height(&self) -> usize {
        self.raster.height()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Present only when output and input share dimensions.
    pub fn metrics(&self) -> Option<FidelityMetrics> {
        self.metrics
    }

    /// Moves the raster out to the caller.
    pub fn into_raster(self) -> Raster {
        self.raster
    }
}

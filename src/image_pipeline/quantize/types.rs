//! Quantization mode selection

use std::fmt;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Which quantizer a pipeline run uses.
///
/// On the command line this is a single integer: `-1` for uniform,
/// `0..=255` for a logarithmic quantizer pivoting on that value and `256`
/// for the data-driven optimal quantizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizationMode {
    #[default]
    Uniform,
    LogPivot(u8),
    Optimal,
}

impl QuantizationMode {
    pub const UNIFORM_CODE: i32 = -1;
    pub const OPTIMAL_CODE: i32 = 256;

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            Self::UNIFORM_CODE => Ok(Self::Uniform),
            Self::OPTIMAL_CODE => Ok(Self::Optimal),
            0..=255 => Ok(Self::LogPivot(code as u8)),
            _ => Err(PipelineError::InvalidMode(code)),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Uniform => Self::UNIFORM_CODE,
            Self::LogPivot(pivot) => *pivot as i32,
            Self::Optimal => Self::OPTIMAL_CODE,
        }
    }
}

impl fmt::Display for QuantizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::LogPivot(pivot) => write!(f, "log-pivot({})", pivot),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

/// Bits actually used per channel: at least one level split, at most eight.
pub(crate) fn effective_bits(bits_per_channel: u32) -> u32 {
    bits_per_channel.clamp(1, 8)
}

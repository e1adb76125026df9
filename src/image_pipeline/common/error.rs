use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Scale must be in (0, 1], got {0}")]
    InvalidScale(f32),

    #[error("Quantization bits must be in [1, 24], got {0}")]
    InvalidQuantizationBits(u32),

    #[error("Quantization mode must be -1, 0..=255 or 256, got {0}")]
    InvalidMode(i32),

    #[error("Without extra credit the bit budget must be a multiple of 3, got {0}")]
    UnevenBitSplit(u32),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Raster buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// True for rejected requests, false for I/O and encoding failures.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PipelineError::InvalidScale(_)
                | PipelineError::InvalidQuantizationBits(_)
                | PipelineError::InvalidMode(_)
                | PipelineError::UnevenBitSplit(_)
                | PipelineError::InvalidDimensions(_, _)
                | PipelineError::BufferSizeMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

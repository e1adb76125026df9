//! Output encoding options

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}

/// Predictor applied before compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffPredictor {
    #[default]
    None,
    /// Horizontal differencing; helps LZW/Deflate on smooth images
    Horizontal,
}

//! Per-channel quantization
//!
//! Three interchangeable strategies reduce an 8-bit sample to one of
//! `2^bits` representatives: uniform intervals, logarithmic bins around a
//! pivot, and Lloyd-trained optimal levels.

mod quantizer;
pub mod types;
pub mod uniform;
pub mod log_pivot;
pub mod optimal;

pub use quantizer::{ChannelQuantizer, Quantizer};
pub use types::QuantizationMode;
pub use uniform::UniformQuantizer;
pub use log_pivot::{build_log_bins, LogBins, LogPivotQuantizer};
pub use optimal::OptimalQuantizer;

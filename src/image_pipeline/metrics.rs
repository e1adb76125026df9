//! Fidelity metrics between an input raster and its processed output.

use crate::image_pipeline::raw::types::Raster;

/// Accumulated error over every sample of two same-sized rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FidelityMetrics {
    /// Sum of squared differences.
    pub squared_error_sum: u64,
    /// Sum of absolute differences.
    pub absolute_error_sum: u64,
}

impl FidelityMetrics {
    /// `None` unless both rasters have identical dimensions.
    pub fn compare(original: &Raster, processed: &Raster) -> Option<Self> {
        if original.width() != processed.width() || original.height() != processed.height() {
            return None;
        }

        let metrics = original
            .as_bytes()
            .iter()
            .zip(processed.as_bytes())
            .fold(Self::default(), |acc, (&a, &b)| {
                let diff = a.abs_diff(b) as u64;
                Self {
                    squared_error_sum: acc.squared_error_sum + diff * diff,
                    absolute_error_sum: acc.absolute_error_sum + diff,
                }
            });
        Some(metrics)
    }

    pub fn mean_squared_error(&self, samples: usize) -> f64 {
        if samples == 0 {
            return 0.0;
        }
        self.squared_error_sum as f64 / samples as f64
    }
}

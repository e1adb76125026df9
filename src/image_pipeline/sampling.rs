//! Geometric resampling
//!
//! Output dimensions and the per-sample area-average kernel.

mod kernel;

pub use kernel::{box_average, SamplingKernel};

/// `round(dim * scale)` per axis, never below one pixel.
pub fn output_dimensions(in_width: usize, in_height: usize, scale: f32) -> (usize, usize) {
    (scale_axis(in_width, scale), scale_axis(in_height, scale))
}

fn scale_axis(extent: usize, scale: f32) -> usize {
    let scaled = (extent as f32 * scale).round();
    if scaled < 1.0 { 1 } else { scaled as usize }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimensions() {
        assert_eq!(output_dimensions(512, 512, 1.0), (512, 512));
        assert_eq!(output_dimensions(512, 512, 0.75), (384, 384));
        assert_eq!(output_dimensions(512, 300, 0.5), (256, 150));
        // 5 * 0.5 = 2.5 rounds away from zero
        assert_eq!(output_dimensions(5, 3, 0.5), (3, 2));
    }

    #[test]
    fn test_output_dimensions_never_empty() {
        assert_eq!(output_dimensions(4, 4, 0.01), (1, 1));
        assert_eq!(output_dimensions(512, 2, 0.1), (51, 1));
    }

    #[test]
    fn test_output_dimensions_match_formula() {
        for &scale in &[0.1f32, 0.25, 0.3, 0.5, 0.66, 0.9, 1.0] {
            for &(w, h) in &[(1usize, 1usize), (7, 3), (64, 48), (512, 512)] {
                let (ow, oh) = output_dimensions(w, h, scale);
                assert_eq!(ow, ((w as f32 * scale).round() as usize).max(1));
                assert_eq!(oh, ((h as f32 * scale).round() as usize).max(1));
            }
        }
    }
}

use crate::image_pipeline::raw::types::Raster;

/// Maps output coordinates back onto the input raster and filters one sample.
///
/// A scale of exactly `1.0` copies input samples through untouched; any other
/// scale takes the rounded mean of the 3x3 neighbourhood around the mapped
/// input pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingKernel {
    scale: f32,
}

impl SamplingKernel {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0
    }

    /// Output `(x, y)` to input `(cx, cy)`: divide by the scale, round half
    /// away from zero, clamp into the input. A zero scale maps to the origin.
    pub fn map_coordinate(&self, x: usize, y: usize, in_width: usize, in_height: usize) -> (usize, usize) {
        if self.scale == 0.0 {
            return (0, 0);
        }
        let cx = map_axis(x, self.scale, in_width);
        let cy = map_axis(y, self.scale, in_height);
        (cx, cy)
    }

    /// Filtered sample at an already mapped input coordinate.
    #[inline]
    pub fn sample(&self, input: &Raster, cx: usize, cy: usize, channel: usize) -> u8 {
        if self.is_identity() {
            input.sample(cx, cy, channel)
        } else {
            box_average(input, cx, cy, channel)
        }
    }
}

fn map_axis(coord: usize, scale: f32, extent: usize) -> usize {
    let mapped = (coord as f32 / scale).round() as i64;
    mapped.clamp(0, extent.saturating_sub(1) as i64) as usize
}

/// Rounded mean of the in-bounds 3x3 neighbourhood centred on `(cx, cy)`.
///
/// Neighbours outside the raster count towards neither the sum nor the
/// divisor, so edge pixels average over 4 or 6 samples instead of 9.
pub fn box_average(input: &Raster, cx: usize, cy: usize, channel: usize) -> u8 {
    let mut sum = 0u32;
    let mut count = 0u32;

    for y in cy.saturating_sub(1)..=(cy + 1).min(input.height().saturating_sub(1)) {
        for x in cx.saturating_sub(1)..=(cx + 1).min(input.width().saturating_sub(1)) {
            sum += input.sample(x, y, channel) as u32;
            count += 1;
        }
    }

    if count == 0 {
        return 0;
    }
    ((sum + count / 2) / count).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> Raster {
        let data = (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect();
        Raster::new(width, height, data).unwrap()
    }

    #[test]
    fn test_identity_scale_copies_every_sample() {
        let raster = gradient(5, 4);
        let kernel = SamplingKernel::new(1.0);

        for y in 0..4 {
            for x in 0..5 {
                let (cx, cy) = kernel.map_coordinate(x, y, 5, 4);
                assert_eq!((cx, cy), (x, y));
                for c in 0..3 {
                    assert_eq!(kernel.sample(&raster, cx, cy, c), raster.sample(x, y, c));
                }
            }
        }
    }

    #[test]
    fn test_map_coordinate_rounds_half_away_from_zero() {
        let kernel = SamplingKernel::new(0.5);
        assert_eq!(kernel.map_coordinate(1, 3, 100, 100), (2, 6));

        // 3 / 0.8 = 3.75 -> 4, 1 / 0.8 = 1.25 -> 1
        let kernel = SamplingKernel::new(0.8);
        assert_eq!(kernel.map_coordinate(3, 1, 100, 100), (4, 1));
    }

    #[test]
    fn test_map_coordinate_clamps_to_input() {
        let kernel = SamplingKernel::new(0.25);
        assert_eq!(kernel.map_coordinate(10, 10, 8, 6), (7, 5));
    }

    #[test]
    fn test_zero_scale_maps_to_origin() {
        let kernel = SamplingKernel::new(0.0);
        assert_eq!(kernel.map_coordinate(9, 9, 4, 4), (0, 0));
    }

    #[test]
    fn test_box_average_interior() {
        // 3x3 raster, red channel 1..=9, mean 5
        let mut data = vec![0u8; 27];
        for i in 0..9 {
            data[i * 3] = (i + 1) as u8;
        }
        let raster = Raster::new(3, 3, data).unwrap();
        assert_eq!(box_average(&raster, 1, 1, 0), 5);
    }

    #[test]
    fn test_box_average_corner_excludes_out_of_bounds() {
        // corner neighbourhood is {0, 1, 3, 4} -> red 1, 2, 4, 5 -> 12 / 4 = 3
        let mut data = vec![0u8; 27];
        for i in 0..9 {
            data[i * 3] = (i + 1) as u8;
        }
        let raster = Raster::new(3, 3, data).unwrap();
        assert_eq!(box_average(&raster, 0, 0, 0), 3);
    }

    #[test]
    fn test_box_average_rounds_half_up() {
        // two in-bounds samples 0 and 1 -> (1 + 1) / 2 = 1
        let raster = Raster::new(2, 1, vec![0, 0, 0, 1, 0, 0]).unwrap();
        assert_eq!(box_average(&raster, 0, 0, 0), 1);
    }

    #[test]
    fn test_box_average_saturated() {
        let raster = Raster::filled(4, 4, 255).unwrap();
        assert_eq!(box_average(&raster, 2, 1, 2), 255);
    }
}

use crate::image_pipeline::quantize::quantizer::ChannelQuantizer;

/// Equal-width intervals over `[0, 255]`, each mapped to its centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformQuantizer {
    step: u32,
    representatives: Vec<u8>,
    passthrough: bool,
}

impl UniformQuantizer {
    /// Eight or more bits quantize nothing; zero bits is treated as one.
    pub fn new(bits_per_channel: u32) -> Self {
        if bits_per_channel >= 8 {
            return Self {
                step: 1,
                representatives: (0..=255).collect(),
                passthrough: true,
            };
        }

        let levels = 1u32 << bits_per_channel.max(1);
        let step = 256 / levels;
        let representatives = (0..levels)
            .map(|k| (k * step + step / 2).min(255) as u8)
            .collect();

        Self {
            step,
            representatives,
            passthrough: false,
        }
    }

    pub fn levels(&self) -> usize {
        self.representatives.len()
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn quantize_value(&self, value: u8) -> u8 {
        if self.passthrough {
            return value;
        }
        let index = (value as usize / self.step as usize).min(self.representatives.len() - 1);
        self.representatives[index]
    }
}

impl ChannelQuantizer for UniformQuantizer {
    fn quantize(&self, value: u8, _channel: usize) -> u8 {
        self.quantize_value(value)
    }

    fn representatives(&self, _channel: usize) -> &[u8] {
        &self.representatives
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_bits() {
        let q = UniformQuantizer::new(2);
        assert_eq!(q.levels(), 4);
        assert_eq!(q.step(), 64);
        assert_eq!(q.representatives(0), &[32, 96, 160, 224]);
        assert_eq!(q.quantize_value(0), 32);
        assert_eq!(q.quantize_value(63), 32);
        assert_eq!(q.quantize_value(64), 96);
        assert_eq!(q.quantize_value(200), 224);
        assert_eq!(q.quantize_value(255), 224);
    }

    #[test]
    fn test_error_bound() {
        for bits in 1..8u32 {
            let q = UniformQuantizer::new(bits);
            let bound = (256 / (1u32 << (bits + 1))) as i32;
            for v in 0..=255u8 {
                let diff = (q.quantize_value(v) as i32 - v as i32).abs();
                assert!(diff <= bound, "bits={} v={} diff={}", bits, v, diff);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        for bits in 0..=8u32 {
            let q = UniformQuantizer::new(bits);
            for v in 0..=255u8 {
                let once = q.quantize_value(v);
                assert_eq!(q.quantize_value(once), once);
            }
        }
    }

    #[test]
    fn test_eight_bits_is_passthrough() {
        let q = UniformQuantizer::new(8);
        for v in 0..=255u8 {
            assert_eq!(q.quantize_value(v), v);
        }
        assert_eq!(UniformQuantizer::new(12).quantize_value(77), 77);
    }

    #[test]
    fn test_zero_bits_clamped_to_one() {
        let q = UniformQuantizer::new(0);
        assert_eq!(q.levels(), 2);
        assert_eq!(q.quantize_value(10), 64);
        assert_eq!(q.quantize_value(250), 192);
    }
}

//! Data-driven quantization via Lloyd refinement.
//!
//! Each channel gets its own set of representatives, trained on the input
//! raster before any resampling. Training runs on a 256-bin histogram, so an
//! iteration costs `256 * levels` instead of `pixels * levels`; the weighted
//! sums are exact integers in `f64`, giving the same centres as a per-sample
//! pass.

use tracing::debug;

use crate::image_pipeline::quantize::quantizer::ChannelQuantizer;
use crate::image_pipeline::quantize::types::effective_bits;
use crate::image_pipeline::raw::types::{CHANNELS, Raster};

pub const LLOYD_ITERATIONS: usize = 10;

/// Per-value sample counts for one channel.
pub type Histogram = [u64; 256];

pub fn channel_histogram(raster: &Raster, channel: usize) -> Histogram {
    let mut histogram = [0u64; 256];
    for value in raster.channel(channel) {
        histogram[value as usize] += 1;
    }
    histogram
}

/// `levels` centres evenly spread over `[0, 255]`, both ends included.
pub fn initial_centers(levels: usize) -> Vec<f64> {
    match levels {
        0 => Vec::new(),
        1 => vec![127.5],
        _ => (0..levels)
            .map(|i| i as f64 / (levels - 1) as f64 * 255.0)
            .collect(),
    }
}

/// Closest centre by absolute distance; the lowest index wins ties.
#[inline]
fn nearest_center(value: f64, centers: &[f64]) -> usize {
    let mut best = 0;
    let mut best_dist = (value - centers[0]).abs();
    for (i, &center) in centers.iter().enumerate().skip(1) {
        let dist = (value - center).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// One assignment + centroid step. Centres nobody picked stay where they are.
pub fn refine_centers(histogram: &Histogram, centers: &mut [f64]) {
    if centers.is_empty() {
        return;
    }

    let mut sums = vec![0.0f64; centers.len()];
    let mut counts = vec![0u64; centers.len()];

    for (value, &count) in histogram.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let k = nearest_center(value as f64, centers);
        sums[k] += value as f64 * count as f64;
        counts[k] += count;
    }

    for ((center, sum), &count) in centers.iter_mut().zip(sums).zip(&counts) {
        if count > 0 {
            *center = sum / count as f64;
        }
    }
}

/// Sum of squared distances from every sample to its nearest centre.
pub fn assignment_error(histogram: &Histogram, centers: &[f64]) -> f64 {
    if centers.is_empty() {
        return 0.0;
    }
    histogram
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(value, &count)| {
            let value = value as f64;
            let diff = value - centers[nearest_center(value, centers)];
            diff * diff * count as f64
        })
        .sum()
}

/// Runs `iterations` refinement steps and rounds the centres to 8 bits.
pub fn train_representatives(histogram: &Histogram, levels: usize, iterations: usize) -> Vec<u8> {
    let mut centers = initial_centers(levels);
    for _ in 0..iterations {
        refine_centers(histogram, &mut centers);
    }
    centers
        .iter()
        .map(|&c| (c.round() as i64).clamp(0, 255) as u8)
        .collect()
}

/// Nearest representative, lowest index on ties.
#[inline]
fn nearest_representative(value: u8, representatives: &[u8]) -> u8 {
    let mut best = representatives[0];
    let mut best_dist = (value as i16 - best as i16).abs();
    for &rep in &representatives[1..] {
        let dist = (value as i16 - rep as i16).abs();
        if dist < best_dist {
            best_dist = dist;
            best = rep;
        }
    }
    best
}

/// Independent R, G and B representatives trained on one raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalQuantizer {
    representatives: [Vec<u8>; CHANNELS],
}

impl OptimalQuantizer {
    pub fn train(input: &Raster, bits_per_channel: u32) -> Self {
        let levels = 1usize << effective_bits(bits_per_channel);
        let representatives = std::array::from_fn(|channel| {
            let histogram = channel_histogram(input, channel);
            let reps = train_representatives(&histogram, levels, LLOYD_ITERATIONS);
            debug!(channel, ?reps, "Trained optimal representatives");
            reps
        });
        Self { representatives }
    }
}

impl ChannelQuantizer for OptimalQuantizer {
    fn quantize(&self, value: u8, channel: usize) -> u8 {
        nearest_representative(value, &self.representatives[channel])
    }

    fn representatives(&self, channel: usize) -> &[u8] {
        &self.representatives[channel]
    }
}

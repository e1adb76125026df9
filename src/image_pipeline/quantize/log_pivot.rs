//! Logarithmic quantization around a pivot value.
//!
//! Bin edges are spaced exponentially away from the pivot, so values close
//! to it land in narrow bins and keep more precision while values far from
//! it share wide bins. Each side of the pivot receives a share of the bins
//! proportional to its width.

use crate::image_pipeline::quantize::quantizer::ChannelQuantizer;
use crate::image_pipeline::quantize::types::effective_bits;

/// Curvature of the exponential warp. Larger values squeeze more bins
/// against the pivot.
pub const CURVATURE: f64 = 2.0;

/// Half-open bins `[edges[i], edges[i + 1])` and one representative per bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBins {
    pub edges: Vec<u16>,
    pub representatives: Vec<u8>,
}

impl LogBins {
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Index of the bin holding `value`; the last bin if nothing matches.
    pub fn bin_index(&self, value: u8) -> usize {
        let value = value as u16;
        self.edges
            .windows(2)
            .position(|w| w[0] <= value && value < w[1])
            .unwrap_or(self.len().saturating_sub(1))
    }
}

/// Builds `levels` bins over `[0, 256]` concentrated around `pivot`.
///
/// When rounding collapses edges so that the result is not exactly
/// `levels + 1` strictly increasing edges, uniform edges are used instead.
pub fn build_log_bins(pivot: u8, levels: usize) -> LogBins {
    if levels == 0 {
        return LogBins { edges: Vec::new(), representatives: Vec::new() };
    }
    if levels == 1 {
        return LogBins { edges: vec![0, 256], representatives: vec![128] };
    }

    let m = pivot as f64;
    let left_range = pivot as f64;
    let right_range = 255.0 - m;

    let mut left_bins = (levels as f64 * left_range / 256.0).round() as usize;
    let mut right_bins = levels - left_bins;

    // A side with any width gets at least one bin
    if pivot > 0 && left_bins == 0 {
        left_bins = 1;
        right_bins = levels - 1;
    }
    if pivot < 255 && right_bins == 0 {
        right_bins = 1;
        left_bins = levels - 1;
    }

    let denom = CURVATURE.exp() - 1.0;
    let mut raw_edges = Vec::with_capacity(levels + 1);
    raw_edges.push(0.0);

    // Left side [0, M]: internal edges get denser approaching M
    for i in 1..left_bins {
        let t = i as f64 / left_bins as f64;
        let normalized = (((1.0 - t) * CURVATURE).exp() - 1.0) / denom;
        raw_edges.push(m * (1.0 - normalized));
    }

    if pivot > 0 && pivot < 255 {
        raw_edges.push(m);
    }

    // Right side [M, 255]: internal edges spread out leaving M
    for i in 1..right_bins {
        let t = i as f64 / right_bins as f64;
        let normalized = ((t * CURVATURE).exp() - 1.0) / denom;
        raw_edges.push(m + right_range * normalized);
    }

    raw_edges.push(256.0);

    let mut edges: Vec<u16> = Vec::with_capacity(raw_edges.len());
    for edge in raw_edges {
        let edge = (edge.round() as i64).clamp(0, 256) as u16;
        if edges.last().is_none_or(|&last| edge > last) {
            edges.push(edge);
        }
    }

    if edges.len() != levels + 1 {
        edges = uniform_edges(levels);
    }

    let representatives = edges
        .windows(2)
        .map(|w| ((w[0] + w[1] - 1) / 2).min(255) as u8)
        .collect();

    LogBins { edges, representatives }
}

fn uniform_edges(levels: usize) -> Vec<u16> {
    let mut edges: Vec<u16> = (0..=levels).map(|i| (i * 256 / levels) as u16).collect();
    if let Some(last) = edges.last_mut() {
        *last = 256;
    }
    edges
}

/// Quantizer backed by [`LogBins`] shared across all three channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPivotQuantizer {
    pivot: u8,
    bins: LogBins,
}

impl LogPivotQuantizer {
    pub fn new(pivot: u8, bits_per_channel: u32) -> Self {
        let levels = 1usize << effective_bits(bits_per_channel);
        Self {
            pivot,
            bins: build_log_bins(pivot, levels),
        }
    }

    pub fn pivot(&self) -> u8 {
        self.pivot
    }

    pub fn bins(&self) -> &LogBins {
        &self.bins
    }

    #[inline]
    pub fn quantize_value(&self, value: u8) -> u8 {
        self.bins.representatives[self.bins.bin_index(value)]
    }
}

impl ChannelQuantizer for LogPivotQuantizer {
    fn quantize(&self, value: u8, _channel: usize) -> u8 {
        self.quantize_value(value)
    }

    fn representatives(&self, _channel: usize) -> &[u8] {
        &self.bins.representatives
    }
}

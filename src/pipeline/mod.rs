pub mod cluster;
pub mod rank;
pub mod sample;

use crate::color::Color;
use crate::decode::PixelBuffer;

/// Tuning knobs for palette extraction. The defaults are policy, not derived
/// values; see the constants on the individual pipeline modules for the
/// filtering thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Pixel sample budget. The sampler strides through the image so that
    /// roughly this many pixels are inspected.
    pub samples: usize,
    /// Number of clusters to refine.
    pub k: usize,
}

pub const DEFAULT_SAMPLES: usize = 4000;
pub const DEFAULT_K: usize = 5;

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            k: DEFAULT_K,
        }
    }
}

/// Run the full sampling, clustering, and ranking pipeline over a decoded
/// pixel buffer.
///
/// Returns `None` when the image is degenerate (zero area, or no pixel
/// survives the sampler's opacity/extremes filter), so the caller's fallback
/// theme always stays in place.
pub fn extract_palette(buffer: &PixelBuffer, options: &ExtractOptions) -> Option<Vec<Color>> {
    if buffer.pixel_count() == 0 {
        log::warn!("zero-area image, keeping current theme");
        return None;
    }

    let samples = sample::sample_pixels(buffer, options.samples);
    if samples.is_empty() {
        log::warn!("no qualifying pixels after filtering, keeping current theme");
        return None;
    }

    let clusters = cluster::refine(&samples, options.k);
    Some(rank::rank_palette(clusters))
}

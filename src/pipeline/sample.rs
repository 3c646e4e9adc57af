use crate::color::Color;
use crate::decode::PixelBuffer;

/// Pixels with alpha below this are treated as transparent background.
pub const MIN_ALPHA: u8 = 200;

/// A pixel is near-white when its max channel exceeds `NEAR_WHITE_MAX` and
/// its min channel exceeds `NEAR_WHITE_MIN`. Near-black is the mirror image.
/// Both extremes are background/border noise in a logo, not subject color.
pub const NEAR_WHITE_MAX: u8 = 245;
pub const NEAR_WHITE_MIN: u8 = 230;
pub const NEAR_BLACK_MAX: u8 = 25;
pub const NEAR_BLACK_MIN: u8 = 20;

/// Draw a bounded subset of qualifying pixels from the buffer.
///
/// Visits every `step`-th pixel where `step = max(1, pixel_count / budget)`,
/// skipping transparent pixels and near-white/near-black extremes. An empty
/// result means the image had no usable subject color.
pub fn sample_pixels(buffer: &PixelBuffer, budget: usize) -> Vec<Color> {
    let pixel_count = buffer.pixel_count();
    if pixel_count == 0 {
        return Vec::new();
    }
    let step = (pixel_count / budget.max(1)).max(1);

    let data = &buffer.data;
    let mut points = Vec::new();
    let mut i = 0;
    while i + 3 < data.len() {
        let (r, g, b, a) = (data[i], data[i + 1], data[i + 2], data[i + 3]);
        i += 4 * step;
        if a < MIN_ALPHA {
            continue;
        }
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if (max > NEAR_WHITE_MAX && min > NEAR_WHITE_MIN)
            || (max < NEAR_BLACK_MAX && min < NEAR_BLACK_MIN)
        {
            continue;
        }
        points.push(Color::new(r, g, b));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_of(pixels: &[[u8; 4]]) -> PixelBuffer {
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        PixelBuffer::new(pixels.len() as u32, 1, data)
    }

    #[test]
    fn opaque_midtone_pixels_survive() {
        let buf = buffer_of(&[[120, 80, 40, 255], [60, 120, 180, 255]]);
        let samples = sample_pixels(&buf, 4000);
        assert_eq!(
            samples,
            vec![Color::new(120, 80, 40), Color::new(60, 120, 180)]
        );
    }

    #[test]
    fn transparent_pixels_excluded() {
        let buf = buffer_of(&[[120, 80, 40, 0], [120, 80, 40, 199]]);
        assert!(sample_pixels(&buf, 4000).is_empty());
    }

    #[test]
    fn alpha_at_threshold_included() {
        let buf = buffer_of(&[[120, 80, 40, 200]]);
        assert_eq!(sample_pixels(&buf, 4000).len(), 1);
    }

    #[test]
    fn near_white_excluded_even_when_opaque() {
        let buf = buffer_of(&[[250, 250, 250, 255]]);
        assert!(sample_pixels(&buf, 4000).is_empty());
    }

    #[test]
    fn near_black_excluded_even_when_opaque() {
        let buf = buffer_of(&[[5, 5, 5, 255]]);
        assert!(sample_pixels(&buf, 4000).is_empty());
    }

    #[test]
    fn bright_but_saturated_pixel_survives() {
        // Max channel above the white cutoff but min channel at 230 exactly,
        // so the near-white test (min > 230) does not fire.
        let buf = buffer_of(&[[250, 230, 240, 255]]);
        assert_eq!(sample_pixels(&buf, 4000).len(), 1);
    }

    #[test]
    fn dark_but_saturated_pixel_survives() {
        // Min channel below the black cutoff but max channel at 25 exactly,
        // so the near-black test (max < 25) does not fire.
        let buf = buffer_of(&[[25, 10, 5, 255]]);
        assert_eq!(sample_pixels(&buf, 4000).len(), 1);
    }

    #[test]
    fn stride_bounds_the_sample_count() {
        // 100 pixels with a budget of 10 gives step 10, so 10 visits.
        let pixels: Vec<[u8; 4]> = (0..100).map(|_| [120, 80, 40, 255]).collect();
        let buf = buffer_of(&pixels);
        assert_eq!(sample_pixels(&buf, 10).len(), 10);
    }

    #[test]
    fn budget_larger_than_image_visits_every_pixel() {
        let pixels: Vec<[u8; 4]> = (0..7).map(|_| [120, 80, 40, 255]).collect();
        let buf = buffer_of(&pixels);
        assert_eq!(sample_pixels(&buf, 4000).len(), 7);
    }

    #[test]
    fn empty_buffer_yields_no_samples() {
        let buf = PixelBuffer::new(0, 0, Vec::new());
        assert!(sample_pixels(&buf, 4000).is_empty());
    }
}

//! Otsu threshold selection
//!
//! Splits pixel intensities into background and foreground by maximizing
//! the between-class variance over the 256-bin intensity histogram.

use crate::core::GrayscaleImage;

/// Number of intensity levels in an 8-bit image
const LEVELS: usize = 256;

/// Build the intensity histogram of an image
///
/// The counts sum to `width * height`.
pub fn histogram(image: &GrayscaleImage) -> [u32; LEVELS] {
    let mut histogram = [0u32; LEVELS];
    for &pixel in image.pixels() {
        histogram[pixel as usize] += 1;
    }
    histogram
}

/// Compute the Otsu threshold of an image
///
/// Scans all 256 levels, tracking background weight and intensity sum, and
/// returns the lowest level that maximizes the between-class variance
/// (strict improvement only, so ties keep the earliest level). Levels with
/// an empty background class are skipped; the scan stops once the
/// foreground class empties. An image whose pixels all share one intensity
/// never yields a valid split and returns 0.
pub fn otsu_threshold(image: &GrayscaleImage) -> u8 {
    let histogram = histogram(image);

    let total = (image.width() * image.height()) as f64;
    let sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut sum_background = 0.0;
    let mut weight_background = 0.0;
    let mut max_variance = 0.0;
    let mut threshold = 0u8;

    for (i, &count) in histogram.iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }

        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }

        sum_background += i as f64 * count as f64;
        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum - sum_background) / weight_foreground;

        let mean_diff = mean_background - mean_foreground;
        let between_variance = weight_background * weight_foreground * mean_diff * mean_diff;

        if between_variance > max_variance {
            max_variance = between_variance;
            threshold = i as u8;
        }
    }

    threshold
}

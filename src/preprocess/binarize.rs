//! Binarization and flattening
//!
//! Applies a threshold to a grayscale image and serializes the resulting
//! {0,1} matrix into the feature vector layout the models were trained on.

use crate::core::{BinaryMatrix, FeatureVector, GrayscaleImage};

/// Binarize an image against a threshold
///
/// A cell becomes 1 iff its intensity is strictly greater than the
/// threshold; a pixel exactly at the threshold maps to background (0).
/// Dimensions match the source image exactly.
pub fn binarize(image: &GrayscaleImage, threshold: u8) -> BinaryMatrix {
    let mut cells = Vec::with_capacity(image.width() * image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            cells.push(u8::from(image.get(x, y) > threshold));
        }
    }
    BinaryMatrix::new(image.width(), image.height(), cells)
}

/// Flatten a binary matrix into a feature vector
///
/// Row-major: rows top-to-bottom, columns left-to-right. This ordering
/// must match the ordering used at training time.
pub fn flatten(matrix: &BinaryMatrix) -> FeatureVector {
    matrix.cells().iter().map(|&cell| cell as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_strict_inequality() {
        let img = GrayscaleImage::from_rows(&[vec![99, 100, 101]]);
        let matrix = binarize(&img, 100);
        // Exactly-at-threshold maps to 0
        assert_eq!(matrix.cells(), &[0, 0, 1]);
    }

    #[test]
    fn test_binarize_preserves_dimensions() {
        let img = GrayscaleImage::new(3, 2, vec![0, 50, 100, 150, 200, 250]);
        let matrix = binarize(&img, 120);
        assert_eq!(matrix.width(), 3);
        assert_eq!(matrix.height(), 2);
        assert_eq!(matrix.cells(), &[0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_binarize_extreme_thresholds() {
        let img = GrayscaleImage::from_rows(&[vec![0, 128, 255]]);

        // Threshold 255: nothing is strictly greater
        assert_eq!(binarize(&img, 255).cells(), &[0, 0, 0]);

        // Threshold 0: everything above zero fires
        assert_eq!(binarize(&img, 0).cells(), &[0, 1, 1]);
    }

    #[test]
    fn test_flatten_row_major_order() {
        let matrix = BinaryMatrix::new(2, 2, vec![0, 1, 1, 0]);
        assert_eq!(flatten(&matrix), vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_flatten_round_trip() {
        let matrix = BinaryMatrix::new(3, 2, vec![1, 0, 1, 0, 1, 0]);
        let flat = flatten(&matrix);

        // Refold row-major and compare against the source matrix
        let refolded: Vec<u8> = flat.iter().map(|&v| v as u8).collect();
        let rebuilt = BinaryMatrix::new(3, 2, refolded);
        assert_eq!(rebuilt, matrix);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(rebuilt.get(x, y), matrix.get(x, y));
            }
        }
    }

    #[test]
    fn test_binarize_then_flatten_scenario() {
        let img = GrayscaleImage::from_rows(&[vec![10, 200], vec![10, 200]]);
        let matrix = binarize(&img, 10);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(1, 0), 1);
        assert_eq!(matrix.get(0, 1), 0);
        assert_eq!(matrix.get(1, 1), 1);
        assert_eq!(flatten(&matrix), vec![0.0, 1.0, 0.0, 1.0]);
    }
}

//! Image decoding and normalization
//!
//! Decodes a raster image (PNG/JPEG/BMP/GIF) and resizes it to the target
//! classification resolution, producing a [`GrayscaleImage`] of red-channel
//! intensities.

use crate::core::{ClassifierError, GrayscaleImage, Result};
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

/// Decode an image file
///
/// Fails with [`ClassifierError::Decode`] if the file is missing,
/// unreadable, or not a supported raster format. The file handle is
/// released on all exit paths.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|cause| ClassifierError::Decode {
        source_name: path.display().to_string(),
        cause,
    })
}

/// Decode an image from an in-memory byte buffer
///
/// `source_name` identifies the buffer in error messages.
pub fn decode_bytes(bytes: &[u8], source_name: &str) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|cause| ClassifierError::Decode {
        source_name: source_name.to_string(),
        cause,
    })
}

/// Resize a decoded image and extract per-pixel intensities
///
/// The image is resized with triangle (bilinear) filtering, then the RED
/// channel of each resized pixel becomes its intensity. The models were
/// trained on red-channel features, so this intentionally deviates from a
/// weighted luma conversion; grayscale inputs are unaffected (all channels
/// equal), and converting "properly" would shift classifications on color
/// input.
pub fn resize_to_intensity(
    image: &DynamicImage,
    width: usize,
    height: usize,
) -> Result<GrayscaleImage> {
    if width == 0 || height == 0 {
        return Err(ClassifierError::InvalidParameter(format!(
            "Target resolution must be non-zero, got {}x{}",
            width, height
        )));
    }

    let resized = image::imageops::resize(
        &image.to_rgb8(),
        width as u32,
        height as u32,
        FilterType::Triangle,
    );

    // ImageBuffer iterates pixels row-major, matching GrayscaleImage layout
    let pixels: Vec<u8> = resized.pixels().map(|p| p.0[0]).collect();
    Ok(GrayscaleImage::new(width, height, pixels))
}

/// Decode a file and normalize it to the target resolution in one step
pub fn load_grayscale<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
) -> Result<GrayscaleImage> {
    let decoded = decode_file(path)?;
    resize_to_intensity(&decoded, width, height)
}

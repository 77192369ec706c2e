//! High-level API for digit classification
//!
//! Ties the preprocessing pipeline and the multi-class SVM together behind
//! one type. Load the models once, then classify any number of images.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use digitsvm::api::DigitClassifier;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the ten class models (28x28 resolution by default)
//! let classifier = DigitClassifier::from_model_dir("models/")?;
//!
//! // Classify an image file
//! let prediction = classifier.classify_path("digit.png")?;
//! println!("digit: {} (margin {:.3})", prediction.digit, prediction.margin());
//! # Ok(())
//! # }
//! ```

use crate::core::{ClassifierError, FeatureVector, Prediction, Result};
use crate::kernel::RbfKernel;
use crate::model::MultiClassModel;
use crate::preprocess;
use image::DynamicImage;
use std::path::Path;

/// Default classification resolution (matches the shipped models)
pub const DEFAULT_WIDTH: usize = 28;
/// Default classification resolution (matches the shipped models)
pub const DEFAULT_HEIGHT: usize = 28;

/// Digit classifier: preprocessing plus a loaded ten-class SVM model
///
/// Immutable after construction; a single instance can serve concurrent
/// predictions without locking.
#[derive(Debug)]
pub struct DigitClassifier {
    model: MultiClassModel,
    width: usize,
    height: usize,
}

impl DigitClassifier {
    /// Wrap a loaded model at a given classification resolution
    ///
    /// Fails with [`ClassifierError::DimensionMismatch`] if
    /// `width * height` does not equal the model's feature dimensionality,
    /// so a bad pairing surfaces here instead of deep inside kernel
    /// evaluation.
    pub fn new(model: MultiClassModel, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ClassifierError::InvalidParameter(format!(
                "Resolution must be non-zero, got {}x{}",
                width, height
            )));
        }
        if width * height != model.dimension() {
            return Err(ClassifierError::DimensionMismatch {
                expected: model.dimension(),
                actual: width * height,
            });
        }
        Ok(Self {
            model,
            width,
            height,
        })
    }

    /// Load the ten class models from a directory at the default 28x28
    /// resolution
    pub fn from_model_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::from_model_dir_with_resolution(dir, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Load the ten class models from a directory at a custom resolution
    pub fn from_model_dir_with_resolution<P: AsRef<Path>>(
        dir: P,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        let model = MultiClassModel::from_dir(dir, RbfKernel::default())?;
        Self::new(model, width, height)
    }

    /// Classify an image file
    pub fn classify_path<P: AsRef<Path>>(&self, path: P) -> Result<Prediction> {
        let decoded = preprocess::decode_file(path)?;
        self.classify_image(&decoded)
    }

    /// Classify an already-decoded image
    pub fn classify_image(&self, image: &DynamicImage) -> Result<Prediction> {
        let features = self.features_from_image(image)?;
        self.model.predict(&features)
    }

    /// Run just the preprocessing pipeline on a decoded image
    ///
    /// resize -> Otsu threshold -> binarize -> flatten, yielding the
    /// {0,1} feature vector the models score.
    pub fn features_from_image(&self, image: &DynamicImage) -> Result<FeatureVector> {
        let gray = preprocess::resize_to_intensity(image, self.width, self.height)?;
        let threshold = preprocess::otsu_threshold(&gray);
        let binary = preprocess::binarize(&gray, threshold);
        Ok(preprocess::flatten(&binary))
    }

    /// Classification width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Classification height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// The underlying multi-class model
    pub fn model(&self) -> &MultiClassModel {
        &self.model
    }
}

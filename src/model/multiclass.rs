//! Ten-class one-vs-rest decision engine
//!
//! Holds exactly one [`ClassModel`] per digit, scores all ten for a feature
//! vector, and picks the arg-max. The whole model is loaded once and never
//! mutated afterwards, so it can be shared read-only across threads.

use crate::core::{ClassifierError, Prediction, Result, NUM_CLASSES};
use crate::kernel::RbfKernel;
use crate::model::ClassModel;
use std::path::Path;

/// Multi-class digit model: ten one-vs-rest class models, index = digit
#[derive(Debug, Clone)]
pub struct MultiClassModel {
    models: [ClassModel; NUM_CLASSES],
}

impl MultiClassModel {
    /// Assemble from ten class models, index i serving digit i
    ///
    /// All models must share the same feature dimensionality.
    pub fn new(models: [ClassModel; NUM_CLASSES]) -> Result<Self> {
        let dimension = models[0].dimension();
        for model in models.iter().skip(1) {
            if model.dimension() != dimension {
                return Err(ClassifierError::DimensionMismatch {
                    expected: dimension,
                    actual: model.dimension(),
                });
            }
        }
        Ok(Self { models })
    }

    /// Load all ten class models from a directory
    ///
    /// Expects, for each digit `c` in 0..=9:
    /// `support_vectors_<c>.txt`, `coefficients_<c>.txt`, `bias_<c>.txt`.
    /// Any class failing to load fails the whole model; there is no
    /// partial-class fallback.
    pub fn from_dir<P: AsRef<Path>>(dir: P, kernel: RbfKernel) -> Result<Self> {
        let dir = dir.as_ref();
        let mut models = Vec::with_capacity(NUM_CLASSES);

        for digit in 0..NUM_CLASSES {
            let model = ClassModel::from_files(
                dir.join(format!("support_vectors_{digit}.txt")),
                dir.join(format!("coefficients_{digit}.txt")),
                dir.join(format!("bias_{digit}.txt")),
                kernel,
            )?;
            models.push(model);
        }

        let models = match <[ClassModel; NUM_CLASSES]>::try_from(models) {
            Ok(models) => models,
            Err(_) => unreachable!("loop pushes exactly NUM_CLASSES models"),
        };
        Self::new(models)
    }

    /// Decision values for all ten classes, in digit order
    pub fn scores(&self, features: &[f64]) -> Result<[f64; NUM_CLASSES]> {
        let mut scores = [0.0; NUM_CLASSES];
        for (slot, model) in scores.iter_mut().zip(self.models.iter()) {
            *slot = model.score(features)?;
        }
        Ok(scores)
    }

    /// Predict the digit for a feature vector
    ///
    /// Arg-max over the ten scores with strict `>` comparison: on ties the
    /// lowest digit wins, including the implicit tie with digit 0 at
    /// initialization. This is the standard one-vs-rest decision rule and
    /// must stay strict for reproducible outputs.
    pub fn predict_digit(&self, features: &[f64]) -> Result<u8> {
        Ok(self.predict(features)?.digit)
    }

    /// Predict with the full score breakdown
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        let scores = self.scores(features)?;

        let mut best = 0;
        let mut best_score = scores[0];
        for (digit, &score) in scores.iter().enumerate().skip(1) {
            if score > best_score {
                best_score = score;
                best = digit;
            }
        }

        Ok(Prediction::new(best as u8, scores))
    }

    /// Feature dimensionality shared by all class models
    pub fn dimension(&self) -> usize {
        self.models[0].dimension()
    }

    /// The class model serving one digit
    ///
    /// # Panics
    /// Panics if `digit > 9`.
    pub fn class_model(&self, digit: u8) -> &ClassModel {
        &self.models[digit as usize]
    }
}

//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) is a hyperparameter that controls the kernel width.

use crate::kernel::Kernel;

/// Kernel width the shipped digit models were trained with
pub const DEFAULT_GAMMA: f64 = 0.001;

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The gamma parameter controls the "reach" of each support vector:
/// - High gamma: only close points have influence
/// - Low gamma: distant points still have influence
///
/// The digit models in this crate all share gamma = 0.001; it is a
/// training-time constant, not something read from the model files.
#[derive(Debug, Clone, Copy)]
pub struct RbfKernel {
    gamma: f64,
}

impl RbfKernel {
    /// Create a new RBF kernel with the specified gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive.
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for RbfKernel {
    /// RBF kernel with the shipped-model gamma (0.001)
    fn default() -> Self {
        Self::new(DEFAULT_GAMMA)
    }
}

impl Kernel for RbfKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        let squared_distance = squared_euclidean_distance(x, y);
        (-self.gamma * squared_distance).exp()
    }
}

/// Compute squared Euclidean distance between two dense vectors
///
/// ||x - y||² = Σᵢ (xᵢ - yᵢ)²
///
/// # Panics
/// Panics if the vectors have different lengths.
fn squared_euclidean_distance(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}

//! Rust implementation of a handwritten digit classifier
//!
//! Ten one-vs-rest Support Vector Machines with an RBF kernel score a
//! binarized fixed-resolution image; the highest-scoring class is the
//! predicted digit. Models are trained offline and loaded from flat
//! numeric text files.

pub mod api;
pub mod core;
pub mod kernel;
pub mod model;
pub mod preprocess;

// Re-export main types for convenience
pub use crate::api::DigitClassifier;
pub use crate::core::error::{ClassifierError, Result};
pub use crate::core::types::*;
pub use crate::kernel::{Kernel, RbfKernel};
pub use crate::model::{ClassModel, MultiClassModel};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

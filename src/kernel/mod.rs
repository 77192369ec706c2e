//! Kernel functions for SVM scoring

pub mod rbf;
pub mod traits;

pub use self::rbf::*;
pub use self::traits::*;

//! Image preprocessing pipeline
//!
//! Turns a raster image into the fixed-length {0,1} feature vector the SVM
//! models consume: decode -> resize -> Otsu threshold -> binarize -> flatten.
//! Every step is deterministic and side-effect free.

pub mod binarize;
pub mod loader;
pub mod otsu;

pub use self::binarize::*;
pub use self::loader::*;
pub use self::otsu::*;

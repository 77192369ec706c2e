//! Trained SVM model loading and scoring
//!
//! Models are trained offline and shipped as flat numeric text files, one
//! triple of sources (support vectors, dual coefficients, bias) per digit
//! class. Everything here is immutable after load.

pub mod class;
pub mod multiclass;

pub use self::class::*;
pub use self::multiclass::*;

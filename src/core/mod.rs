//! Core types and errors for the digit classification pipeline

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;

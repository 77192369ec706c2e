//! Per-class SVM model
//!
//! One binary one-vs-rest model: support vectors, a parallel row of dual
//! coefficients, and a bias. Scoring an input vector yields the
//! unnormalized signed decision value for "this digit vs. the rest".
//!
//! Source formats:
//! - support vectors: one row per line, values separated by whitespace,
//!   all rows the same length
//! - coefficients: a single line, values separated by whitespace, commas,
//!   or semicolons, one per support-vector row
//! - bias: a single line holding one floating-point literal

use crate::core::{ClassifierError, Result};
use crate::kernel::{Kernel, RbfKernel};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A single one-vs-rest SVM model for one digit class
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ClassModel {
    support_vectors: Vec<Vec<f64>>,
    coefficients: Vec<f64>,
    bias: f64,
    kernel: RbfKernel,
    dimension: usize,
}

impl ClassModel {
    /// Assemble a model from already-parsed parts
    ///
    /// Validates the structural invariants: at least one support vector,
    /// one coefficient per support vector, and equal-length rows.
    pub fn new(
        support_vectors: Vec<Vec<f64>>,
        coefficients: Vec<f64>,
        bias: f64,
        kernel: RbfKernel,
    ) -> Result<Self> {
        let first = support_vectors.first().ok_or_else(|| {
            ClassifierError::InvalidParameter("Model must have at least one support vector".into())
        })?;
        let dimension = first.len();

        if let Some(row) = support_vectors.iter().position(|sv| sv.len() != dimension) {
            return Err(ClassifierError::InvalidParameter(format!(
                "Support vector {} has {} values, expected {}",
                row,
                support_vectors[row].len(),
                dimension
            )));
        }

        if coefficients.len() != support_vectors.len() {
            return Err(ClassifierError::InvalidParameter(format!(
                "{} coefficients for {} support vectors",
                coefficients.len(),
                support_vectors.len()
            )));
        }

        Ok(Self {
            support_vectors,
            coefficients,
            bias,
            kernel,
            dimension,
        })
    }

    /// Load a model from its three source files
    pub fn from_files<P: AsRef<Path>>(
        support_vector_path: P,
        coefficient_path: P,
        bias_path: P,
        kernel: RbfKernel,
    ) -> Result<Self> {
        let sv_path = support_vector_path.as_ref();
        let coef_path = coefficient_path.as_ref();
        let bias_path = bias_path.as_ref();

        Self::from_readers(
            BufReader::new(File::open(sv_path)?),
            &sv_path.display().to_string(),
            BufReader::new(File::open(coef_path)?),
            &coef_path.display().to_string(),
            BufReader::new(File::open(bias_path)?),
            &bias_path.display().to_string(),
            kernel,
        )
    }

    /// Load a model from three readers (for testing and flexibility)
    ///
    /// Each reader is paired with a source name used in error reporting.
    #[allow(clippy::too_many_arguments)]
    pub fn from_readers<S, C, B>(
        support_vector_reader: S,
        support_vector_name: &str,
        coefficient_reader: C,
        coefficient_name: &str,
        bias_reader: B,
        bias_name: &str,
        kernel: RbfKernel,
    ) -> Result<Self>
    where
        S: BufRead,
        C: BufRead,
        B: BufRead,
    {
        let support_vectors = parse_support_vectors(support_vector_reader, support_vector_name)?;
        let coefficients = parse_coefficients(coefficient_reader, coefficient_name)?;

        if coefficients.len() != support_vectors.len() {
            return Err(ClassifierError::CoefficientCountMismatch {
                source_name: coefficient_name.to_string(),
                expected: support_vectors.len(),
                actual: coefficients.len(),
            });
        }

        let bias = parse_bias(bias_reader, bias_name)?;

        // Invariants are already established; new() cannot fail here
        Self::new(support_vectors, coefficients, bias, kernel)
    }

    /// Decision value for a feature vector
    ///
    /// score(v) = Σᵢ coefficientᵢ * K(v, support_vectorᵢ) + bias
    ///
    /// The result is a signed, uncalibrated value; only its order relative
    /// to the other classes' scores is meaningful.
    pub fn score(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.dimension {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.dimension,
                actual: features.len(),
            });
        }

        let total: f64 = self
            .coefficients
            .iter()
            .zip(self.support_vectors.iter())
            .map(|(coefficient, sv)| coefficient * self.kernel.compute(features, sv))
            .sum();

        Ok(total + self.bias)
    }

    /// Number of support vectors
    pub fn n_support_vectors(&self) -> usize {
        self.support_vectors.len()
    }

    /// Feature dimensionality the model was trained on
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Bias term
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// The kernel this model scores with
    pub fn kernel(&self) -> &RbfKernel {
        &self.kernel
    }
}

/// Parse support-vector rows: one whitespace-separated row per line
///
/// Blank lines are skipped. All rows must have the same length.
fn parse_support_vectors<R: BufRead>(reader: R, source_name: &str) -> Result<Vec<Vec<f64>>> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for (position, token) in line.split_whitespace().enumerate() {
            let value = token
                .parse::<f64>()
                .map_err(|_| ClassifierError::InvalidToken {
                    source_name: source_name.to_string(),
                    token: token.to_string(),
                    position,
                    line: line_index + 1,
                })?;
            row.push(value);
        }

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(ClassifierError::RaggedSupportVectors {
                    source_name: source_name.to_string(),
                    row: rows.len(),
                    expected: first.len(),
                    actual: row.len(),
                });
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ClassifierError::EmptyModelSource {
            source_name: source_name.to_string(),
        });
    }

    Ok(rows)
}

/// Parse the coefficient row: a single line split on whitespace, commas,
/// or semicolons
fn parse_coefficients<R: BufRead>(mut reader: R, source_name: &str) -> Result<Vec<f64>> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let mut coefficients = Vec::new();
    let tokens = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty());

    for (position, token) in tokens.enumerate() {
        let value = token
            .parse::<f64>()
            .map_err(|_| ClassifierError::InvalidToken {
                source_name: source_name.to_string(),
                token: token.to_string(),
                position,
                line: 1,
            })?;
        coefficients.push(value);
    }

    if coefficients.is_empty() {
        return Err(ClassifierError::EmptyModelSource {
            source_name: source_name.to_string(),
        });
    }

    Ok(coefficients)
}

/// Parse the bias: a single line holding one floating-point literal
fn parse_bias<R: BufRead>(mut reader: R, source_name: &str) -> Result<f64> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let token = line.trim();

    if token.is_empty() {
        return Err(ClassifierError::EmptyModelSource {
            source_name: source_name.to_string(),
        });
    }

    token
        .parse::<f64>()
        .map_err(|_| ClassifierError::InvalidToken {
            source_name: source_name.to_string(),
            token: token.to_string(),
            position: 0,
            line: 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn model_from_strs(sv: &str, coef: &str, bias: &str) -> Result<ClassModel> {
        ClassModel::from_readers(
            Cursor::new(sv.to_string()),
            "sv",
            Cursor::new(coef.to_string()),
            "coef",
            Cursor::new(bias.to_string()),
            "bias",
            RbfKernel::default(),
        )
    }

    #[test]
    fn test_load_basic_model() {
        let model = model_from_strs("0.0 1.0\n1.0 0.0\n", "0.5 -0.5", "0.25").unwrap();
        assert_eq!(model.n_support_vectors(), 2);
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.bias(), 0.25);
    }

    #[test]
    fn test_coefficients_split_on_mixed_separators() {
        let model = model_from_strs("1.0\n2.0\n3.0\n", "0.5, -0.5; 1.5", "0.0").unwrap();
        assert_eq!(model.n_support_vectors(), 3);
    }

    #[test]
    fn test_invalid_coefficient_token_reported_with_position() {
        let err = model_from_strs("0.0\n1.0\n2.0\n", "1.0, abc, 2.0", "0.0").unwrap_err();
        match err {
            ClassifierError::InvalidToken {
                source_name,
                token,
                position,
                ..
            } => {
                assert_eq!(source_name, "coef");
                assert_eq!(token, "abc");
                assert_eq!(position, 1);
            }
            other => panic!("Expected InvalidToken, got: {other:?}"),
        }
    }

    #[test]
    fn test_empty_coefficient_source_fails() {
        let err = model_from_strs("0.0\n", "", "0.0").unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::EmptyModelSource { ref source_name } if source_name == "coef"
        ));
    }

    #[test]
    fn test_empty_support_vector_source_fails() {
        let err = model_from_strs("", "1.0", "0.0").unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::EmptyModelSource { ref source_name } if source_name == "sv"
        ));
    }

    #[test]
    fn test_invalid_support_vector_token_reports_line() {
        let err = model_from_strs("0.0 1.0\n0.0 oops\n", "1.0 1.0", "0.0").unwrap_err();
        match err {
            ClassifierError::InvalidToken {
                source_name,
                token,
                position,
                line,
            } => {
                assert_eq!(source_name, "sv");
                assert_eq!(token, "oops");
                assert_eq!(position, 1);
                assert_eq!(line, 2);
            }
            other => panic!("Expected InvalidToken, got: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_bias_token_fails() {
        let err = model_from_strs("0.0\n", "1.0", "not-a-number").unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::InvalidToken { ref source_name, ref token, .. }
                if source_name == "bias" && token == "not-a-number"
        ));
    }

    #[test]
    fn test_coefficient_count_mismatch() {
        let err = model_from_strs("0.0\n1.0\n", "1.0 2.0 3.0", "0.0").unwrap_err();
        match err {
            ClassifierError::CoefficientCountMismatch {
                source_name,
                expected,
                actual,
            } => {
                assert_eq!(source_name, "coef");
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected CoefficientCountMismatch, got: {other:?}"),
        }
    }

    #[test]
    fn test_ragged_support_vectors_rejected() {
        let err = model_from_strs("0.0 1.0\n0.0 1.0 2.0\n", "1.0 1.0", "0.0").unwrap_err();
        match err {
            ClassifierError::RaggedSupportVectors {
                row,
                expected,
                actual,
                ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected RaggedSupportVectors, got: {other:?}"),
        }
    }

    #[test]
    fn test_score_single_support_vector_at_origin() {
        // sv [0,0], coefficient 1.0, bias 0.0: scoring [0,0] gives
        // 1.0 * K(v, v) + 0.0 = exactly 1.0
        let model = model_from_strs("0.0 0.0\n", "1.0", "0.0").unwrap();
        assert_eq!(model.score(&[0.0, 0.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_score_includes_bias() {
        let model = model_from_strs("0.0 0.0\n", "1.0", "-0.5").unwrap();
        let score = model.score(&[0.0, 0.0]).unwrap();
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_dimension_mismatch() {
        let model = model_from_strs("0.0 0.0\n", "1.0", "0.0").unwrap();
        let err = model.score(&[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_new_rejects_empty_model() {
        let err = ClassModel::new(Vec::new(), Vec::new(), 0.0, RbfKernel::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidParameter(_)));
    }

    #[test]
    fn test_new_rejects_count_mismatch() {
        let err = ClassModel::new(
            vec![vec![0.0, 1.0]],
            vec![1.0, 2.0],
            0.0,
            RbfKernel::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidParameter(_)));
    }
}

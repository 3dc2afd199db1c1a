//! Error types for sign normalization, result comparison and fixture I/O.

use thiserror::Error;

use crate::results::OptionalField;

/// Errors raised when two matrices cannot be normalized against each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Both inputs are matrices, but their shapes differ.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        /// Shape `(rows, cols)` of the first matrix.
        left: (usize, usize),
        /// Shape `(rows, cols)` of the second matrix.
        right: (usize, usize),
    },

    /// Nested rows do not form a rectangular matrix.
    #[error("row {row} has {actual} values, expected {expected}")]
    NotRectangular {
        /// Index of the first offending row (0-based).
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

/// Reasons two ordination results are not considered equal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompareError {
    /// One of the compared values is not an `OrdinationResults`.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the expected type.
        expected: &'static str,
        /// Name of the type that was passed.
        actual: &'static str,
    },

    /// A descriptive string field differs.
    #[error("{field} differs: '{left}' vs '{right}'")]
    NameMismatch {
        field: &'static str,
        left: String,
        right: String,
    },

    /// An optional field is set on one side only.
    #[error(
        "{field} is present in only one result (first: {left_present}, second: {right_present})"
    )]
    PresenceMismatch {
        field: OptionalField,
        left_present: bool,
        right_present: bool,
    },

    /// Two numeric fields have incompatible shapes.
    #[error("{field}: {source}")]
    Shape {
        field: &'static str,
        #[source]
        source: ShapeError,
    },

    /// An element differs by more than the tolerance.
    #[error("{field}{index:?} differs: {left} vs {right} (threshold {threshold:e})")]
    ValueMismatch {
        field: &'static str,
        /// Row/column of the element; a single index for vectors.
        index: Vec<usize>,
        left: f64,
        right: f64,
        threshold: f64,
    },
}

impl CompareError {
    /// Returns `true` for mismatches in field contents (names, presence, values).
    #[must_use]
    pub fn is_value_mismatch(&self) -> bool {
        matches!(
            self,
            Self::NameMismatch { .. } | Self::PresenceMismatch { .. } | Self::ValueMismatch { .. }
        )
    }
}

/// Invalid input for an `OrdinationResults` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultsError {
    #[error("{field} contains NaN or infinite values")]
    NonFinite { field: &'static str },
}

/// Errors raised while reading or writing result fixtures.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid ordination results: {0}")]
    Invalid(#[from] ResultsError),
}

/// Convenience alias for comparison results.
pub type CompareResult<T = ()> = Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_field() {
        let err = CompareError::ValueMismatch {
            field: "eigvals",
            index: vec![1],
            left: 2.0,
            right: 2.5,
            threshold: 1.5e-6,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("eigvals[1] differs"), "{msg}");

        let err = CompareError::PresenceMismatch {
            field: OptionalField::BiplotScores,
            left_present: false,
            right_present: true,
        };
        assert!(err.to_string().contains("biplot_scores"));
    }

    #[test]
    fn value_mismatch_category() {
        let err = CompareError::TypeMismatch { expected: "A", actual: "B" };
        assert!(!err.is_value_mismatch());

        let err = CompareError::NameMismatch {
            field: "short_method_name",
            left: "PCA".to_string(),
            right: "PCoA".to_string(),
        };
        assert!(err.is_value_mismatch());
    }

    #[test]
    fn shape_error_keeps_source() {
        use std::error::Error as _;

        let err = CompareError::Shape {
            field: "site",
            source: ShapeError::ShapeMismatch { left: (2, 2), right: (1, 2) },
        };
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "site: shape mismatch: (2, 2) vs (1, 2)");
    }
}

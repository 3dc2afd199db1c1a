//! Approximate equality of ordination results.
//!
//! [`compare_ordination_results`] returns the first difference it finds as a
//! [`CompareError`]; the `assert_*` functions panic with it, which is what
//! tests normally want.
//!
//! Score matrices are sign-normalized before their values are compared,
//! since ordination axes are only defined up to their direction.

use std::any::{Any, type_name};

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::{
    error::{CompareError, CompareResult, ShapeError},
    results::{MatrixField, OptionalField, OrdinationResults},
    signs::normalize_signs_with,
    tolerance::Tolerance,
};

/// Knobs for [`compare_ordination_results_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    pub tolerance: Tolerance,
    /// Skip the `short_method_name` / `long_method_name` checks.
    pub ignore_method_names: bool,
    /// Normalize column signs of score matrices before comparing them.
    pub ignore_directionality: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            ignore_method_names: false,
            ignore_directionality: true,
        }
    }
}

/// Compares two results with the default options.
pub fn compare_ordination_results(
    first: &OrdinationResults,
    second: &OrdinationResults,
) -> CompareResult {
    compare_ordination_results_with(first, second, &CompareOptions::default())
}

/// Compares two results field by field and returns the first difference.
pub fn compare_ordination_results_with(
    first: &OrdinationResults,
    second: &OrdinationResults,
    options: &CompareOptions,
) -> CompareResult {
    debug!(
        first = %first.short_method_name,
        second = %second.short_method_name,
        "comparing ordination results"
    );

    if !options.ignore_method_names {
        compare_names("short_method_name", &first.short_method_name, &second.short_method_name)?;
        compare_names("long_method_name", &first.long_method_name, &second.long_method_name)?;
    }

    compare_vectors("eigvals", &first.eigvals, &second.eigvals, &options.tolerance)?;
    compare_scores("site", &first.site, &second.site, options)?;

    for field in MatrixField::ALL {
        match (first.matrix(field), second.matrix(field)) {
            (Some(a), Some(b)) => compare_scores(field.as_str(), a, b, options)?,
            (None, None) => debug!(%field, "absent in both, skipped"),
            (a, b) => return Err(presence_mismatch(field.into(), a.is_some(), b.is_some())),
        }
    }

    let field = OptionalField::ProportionExplained;
    match (first.proportion_explained(), second.proportion_explained()) {
        (Some(a), Some(b)) => compare_vectors(field.as_str(), a, b, &options.tolerance)?,
        (None, None) => debug!(%field, "absent in both, skipped"),
        (a, b) => return Err(presence_mismatch(field, a.is_some(), b.is_some())),
    }

    Ok(())
}

/// Compares two values of arbitrary type, failing unless both are
/// [`OrdinationResults`].
pub fn compare_any<A: Any, B: Any>(
    first: &A,
    second: &B,
    options: &CompareOptions,
) -> CompareResult {
    let first = downcast(first)?;
    let second = downcast(second)?;
    compare_ordination_results_with(first, second, options)
}

/// Asserts that two values are equal ordination results.
///
/// # Panics
///
/// Panics if either value is not an [`OrdinationResults`] or if any field
/// differs. The message names the field and element that failed.
#[track_caller]
pub fn assert_ordination_results_equal<A: Any, B: Any>(observed: &A, expected: &B) {
    assert_ordination_results_equal_with(observed, expected, &CompareOptions::default());
}

/// [`assert_ordination_results_equal`] with explicit options.
///
/// # Panics
///
/// See [`assert_ordination_results_equal`].
#[track_caller]
pub fn assert_ordination_results_equal_with<A: Any, B: Any>(
    observed: &A,
    expected: &B,
    options: &CompareOptions,
) {
    if let Err(e) = compare_any(observed, expected, options) {
        panic!("ordination results differ: {e}");
    }
}

fn downcast<T: Any>(value: &T) -> CompareResult<&OrdinationResults> {
    (value as &dyn Any).downcast_ref::<OrdinationResults>().ok_or(CompareError::TypeMismatch {
        expected: type_name::<OrdinationResults>(),
        actual: type_name::<T>(),
    })
}

fn presence_mismatch(field: OptionalField, left_present: bool, right_present: bool) -> CompareError {
    CompareError::PresenceMismatch { field, left_present, right_present }
}

fn compare_names(field: &'static str, left: &str, right: &str) -> CompareResult {
    if left == right {
        Ok(())
    } else {
        Err(CompareError::NameMismatch { field, left: left.to_string(), right: right.to_string() })
    }
}

fn compare_vectors(
    field: &'static str,
    left: &Array1<f64>,
    right: &Array1<f64>,
    tolerance: &Tolerance,
) -> CompareResult {
    if left.len() != right.len() {
        return Err(CompareError::Shape {
            field,
            source: ShapeError::ShapeMismatch {
                left: (left.len(), 1),
                right: (right.len(), 1),
            },
        });
    }
    for (i, (&l, &r)) in left.iter().zip(right).enumerate() {
        if !tolerance.almost_equal(l, r) {
            return Err(CompareError::ValueMismatch {
                field,
                index: vec![i],
                left: l,
                right: r,
                threshold: tolerance.threshold(),
            });
        }
    }
    debug!(field, "equal");
    Ok(())
}

fn compare_scores(
    field: &'static str,
    left: &Array2<f64>,
    right: &Array2<f64>,
    options: &CompareOptions,
) -> CompareResult {
    let tolerance = &options.tolerance;
    let (left, right) = if options.ignore_directionality {
        normalize_signs_with(left, right, tolerance)
            .map_err(|source| CompareError::Shape { field, source })?
    } else if left.dim() != right.dim() {
        return Err(CompareError::Shape {
            field,
            source: ShapeError::ShapeMismatch {
                left: left.dim(),
                right: right.dim(),
            },
        });
    } else {
        (left.clone(), right.clone())
    };

    for ((row, col), &l) in left.indexed_iter() {
        let r = right[[row, col]];
        if !tolerance.almost_equal(l, r) {
            return Err(CompareError::ValueMismatch {
                field,
                index: vec![row, col],
                left: l,
                right: r,
                threshold: tolerance.threshold(),
            });
        }
    }
    debug!(field, "equal");
    Ok(())
}

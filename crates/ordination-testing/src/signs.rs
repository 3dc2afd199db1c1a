//! Column sign normalization for sign-ambiguous matrices.
//!
//! Eigenvector-like columns are only defined up to their sign. Before two
//! such matrices are compared, every column of the second matrix is flipped
//! so that it agrees in sign with the first matrix at one anchor entry: the
//! entry of largest magnitude in the first matrix's column.
//!
//! Flipping is done per column and never per element, so columns that differ
//! by more than a sign stay different.

use ndarray::{Array2, ArrayView1, Axis};
use tracing::trace;

use crate::{error::ShapeError, tolerance::Tolerance};

/// Normalizes the column signs of `b` against `a` with the default tolerance.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use ordination_testing::normalize_signs;
///
/// let a = array![[1.0, 2.0], [3.0, -1.0]];
/// let b = array![[-1.0, 2.0], [-3.0, -1.0]];
/// let (a, b) = normalize_signs(&a, &b).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn normalize_signs(
    a: &Array2<f64>,
    b: &Array2<f64>,
) -> Result<(Array2<f64>, Array2<f64>), ShapeError> {
    normalize_signs_with(a, b, &Tolerance::default())
}

/// Normalizes the column signs of `b` against `a`.
///
/// `a` is returned unchanged. A column of `b` is negated when the anchor
/// entry of `a` and the entry of `b` at the same row both carry a sign and
/// the signs differ. Columns whose anchor is sign-zero are left alone.
pub fn normalize_signs_with(
    a: &Array2<f64>,
    b: &Array2<f64>,
    tolerance: &Tolerance,
) -> Result<(Array2<f64>, Array2<f64>), ShapeError> {
    if a.dim() != b.dim() {
        return Err(ShapeError::ShapeMismatch { left: a.dim(), right: b.dim() });
    }

    let mut flipped = b.clone();
    for (col, (ref_column, mut column)) in
        a.axis_iter(Axis(1)).zip(flipped.axis_iter_mut(Axis(1))).enumerate()
    {
        let Some(row) = anchor_row(ref_column) else {
            continue;
        };
        let sign_a = tolerance.sign(ref_column[row]);
        let sign_b = tolerance.sign(column[row]);
        if sign_a != 0 && sign_b != 0 && sign_a != sign_b {
            trace!(col, row, "flipping column sign");
            column.mapv_inplace(|x| -x);
        }
    }

    Ok((a.clone(), flipped))
}

/// Same as [`normalize_signs`], for row-major nested input.
///
/// Fails with [`ShapeError::NotRectangular`] if either input has rows of
/// different lengths.
pub fn normalize_sign_rows(
    a: &[Vec<f64>],
    b: &[Vec<f64>],
) -> Result<(Array2<f64>, Array2<f64>), ShapeError> {
    let a = matrix_from_rows(a)?;
    let b = matrix_from_rows(b)?;
    normalize_signs(&a, &b)
}

/// Builds a matrix from row-major nested vectors.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<Array2<f64>, ShapeError> {
    let ncols = rows.first().map_or(0, Vec::len);
    if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(ShapeError::NotRectangular { row, expected: ncols, actual: values.len() });
    }

    Ok(Array2::from_shape_fn((rows.len(), ncols), |(i, j)| rows[i][j]))
}

/// Index of the entry with the largest magnitude; the first one wins ties.
///
/// Returns `None` for an empty column.
fn anchor_row(column: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (row, &x) in column.iter().enumerate() {
        match best {
            Some((_, max)) if x.abs() <= max => {}
            _ => best = Some((row, x.abs())),
        }
    }
    best.map(|(row, _)| row)
}

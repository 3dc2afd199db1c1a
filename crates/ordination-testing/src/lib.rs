//! Test helpers for ordination results.
//!
//! Ordination methods (PCA, PCoA, CA, CCA, RDA) produce score matrices whose
//! column signs are arbitrary. This crate compares such results up to a
//! per-column sign flip and a fixed floating point tolerance.
//!
//! - [`normalize_signs`] aligns the column signs of one matrix to another
//! - [`assert_ordination_results_equal`] compares two [`OrdinationResults`]
//! - [`get_data_path`] / [`data_path!`] locate fixture files
//!
//! # Quick start
//!
//! ```
//! use ndarray::array;
//! use ordination_testing::prelude::*;
//!
//! let expected = OrdinationResults::new("PCA", "Principal Component Analysis",
//!     array![2.0, 1.0], array![[1.0, -2.0], [3.0, 4.0]]);
//!
//! // The second axis points the other way.
//! let mut observed = expected.clone();
//! observed.site.column_mut(1).mapv_inplace(|x| -x);
//!
//! assert_ordination_results_equal(&observed, &expected);
//! ```

pub mod compare;
pub mod data;
pub mod error;
pub mod results;
pub mod signs;
pub mod tolerance;

pub use compare::{
    CompareOptions, assert_ordination_results_equal, assert_ordination_results_equal_with,
    compare_any, compare_ordination_results, compare_ordination_results_with,
};
pub use data::{get_data_path, load_results, save_results};
pub use error::{CompareError, IoError, ResultsError, ShapeError};
pub use results::{MatrixField, OptionalField, OrdinationResults};
pub use signs::{matrix_from_rows, normalize_sign_rows, normalize_signs, normalize_signs_with};
pub use tolerance::Tolerance;

/// Commonly used items.
pub mod prelude {
    pub use crate::{
        CompareOptions, MatrixField, OptionalField, OrdinationResults, Tolerance,
        assert_ordination_results_equal, compare_ordination_results, data_path, get_data_path,
        normalize_signs,
    };
}

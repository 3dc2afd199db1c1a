//! The ordination result record and its optional fields.

use std::fmt;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::ResultsError;

/// Output of an ordination method (PCA, PCoA, CA, CCA, RDA, ...).
///
/// The names, eigenvalues and site scores are always present. The remaining
/// fields depend on the method and are set or cleared through the typed
/// setters, which reject non-finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinationResults {
    /// Abbreviated method name, e.g. `PCoA`.
    pub short_method_name: String,
    /// Full method name, e.g. `Principal Coordinate Analysis`.
    pub long_method_name: String,
    /// Eigenvalue-like importance of each axis.
    pub eigvals: Array1<f64>,
    /// Site (sample) scores, one row per site and one column per axis.
    pub site: Array2<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<Array2<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    samples: Option<Array2<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    biplot_scores: Option<Array2<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sample_constraints: Option<Array2<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    proportion_explained: Option<Array1<f64>>,
}

/// Names of the optional fields of [`OrdinationResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalField {
    Features,
    Samples,
    BiplotScores,
    SampleConstraints,
    ProportionExplained,
}

impl OptionalField {
    /// Field name as it appears in serialized results.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Features => MatrixField::Features.as_str(),
            Self::Samples => MatrixField::Samples.as_str(),
            Self::BiplotScores => MatrixField::BiplotScores.as_str(),
            Self::SampleConstraints => MatrixField::SampleConstraints.as_str(),
            Self::ProportionExplained => "proportion_explained",
        }
    }
}

impl fmt::Display for OptionalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The optional score matrices of [`OrdinationResults`].
///
/// Their columns are ordination axes, so their signs are arbitrary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixField {
    Features,
    Samples,
    BiplotScores,
    SampleConstraints,
}

impl MatrixField {
    pub const ALL: [Self; 4] =
        [Self::Features, Self::Samples, Self::BiplotScores, Self::SampleConstraints];

    /// Field name as it appears in serialized results.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Samples => "samples",
            Self::BiplotScores => "biplot_scores",
            Self::SampleConstraints => "sample_constraints",
        }
    }
}

impl fmt::Display for MatrixField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MatrixField> for OptionalField {
    fn from(field: MatrixField) -> Self {
        match field {
            MatrixField::Features => Self::Features,
            MatrixField::Samples => Self::Samples,
            MatrixField::BiplotScores => Self::BiplotScores,
            MatrixField::SampleConstraints => Self::SampleConstraints,
        }
    }
}

impl OrdinationResults {
    /// Creates results with only the mandatory fields set.
    pub fn new(
        short_method_name: impl Into<String>,
        long_method_name: impl Into<String>,
        eigvals: Array1<f64>,
        site: Array2<f64>,
    ) -> Self {
        Self {
            short_method_name: short_method_name.into(),
            long_method_name: long_method_name.into(),
            eigvals,
            site,
            features: None,
            samples: None,
            biplot_scores: None,
            sample_constraints: None,
            proportion_explained: None,
        }
    }

    #[must_use]
    pub fn features(&self) -> Option<&Array2<f64>> {
        self.features.as_ref()
    }

    #[must_use]
    pub fn samples(&self) -> Option<&Array2<f64>> {
        self.samples.as_ref()
    }

    #[must_use]
    pub fn biplot_scores(&self) -> Option<&Array2<f64>> {
        self.biplot_scores.as_ref()
    }

    #[must_use]
    pub fn sample_constraints(&self) -> Option<&Array2<f64>> {
        self.sample_constraints.as_ref()
    }

    #[must_use]
    pub fn proportion_explained(&self) -> Option<&Array1<f64>> {
        self.proportion_explained.as_ref()
    }

    /// Returns the matrix stored in an optional matrix field.
    #[must_use]
    pub fn matrix(&self, field: MatrixField) -> Option<&Array2<f64>> {
        match field {
            MatrixField::Features => self.features.as_ref(),
            MatrixField::Samples => self.samples.as_ref(),
            MatrixField::BiplotScores => self.biplot_scores.as_ref(),
            MatrixField::SampleConstraints => self.sample_constraints.as_ref(),
        }
    }

    /// Whether an optional field is set.
    #[must_use]
    pub fn is_present(&self, field: impl Into<OptionalField>) -> bool {
        match field.into() {
            OptionalField::Features => self.features.is_some(),
            OptionalField::Samples => self.samples.is_some(),
            OptionalField::BiplotScores => self.biplot_scores.is_some(),
            OptionalField::SampleConstraints => self.sample_constraints.is_some(),
            OptionalField::ProportionExplained => self.proportion_explained.is_some(),
        }
    }

    /// Sets or clears an optional matrix field.
    pub fn set_matrix(
        &mut self,
        field: MatrixField,
        value: Option<Array2<f64>>,
    ) -> Result<(), ResultsError> {
        if let Some(m) = &value {
            ensure_finite(field.as_str(), m.iter())?;
        }
        let slot = match field {
            MatrixField::Features => &mut self.features,
            MatrixField::Samples => &mut self.samples,
            MatrixField::BiplotScores => &mut self.biplot_scores,
            MatrixField::SampleConstraints => &mut self.sample_constraints,
        };
        *slot = value;
        Ok(())
    }

    pub fn set_features(&mut self, value: Option<Array2<f64>>) -> Result<(), ResultsError> {
        self.set_matrix(MatrixField::Features, value)
    }

    pub fn set_samples(&mut self, value: Option<Array2<f64>>) -> Result<(), ResultsError> {
        self.set_matrix(MatrixField::Samples, value)
    }

    pub fn set_biplot_scores(&mut self, value: Option<Array2<f64>>) -> Result<(), ResultsError> {
        self.set_matrix(MatrixField::BiplotScores, value)
    }

    pub fn set_sample_constraints(
        &mut self,
        value: Option<Array2<f64>>,
    ) -> Result<(), ResultsError> {
        self.set_matrix(MatrixField::SampleConstraints, value)
    }

    pub fn set_proportion_explained(
        &mut self,
        value: Option<Array1<f64>>,
    ) -> Result<(), ResultsError> {
        if let Some(v) = &value {
            ensure_finite(OptionalField::ProportionExplained.as_str(), v.iter())?;
        }
        self.proportion_explained = value;
        Ok(())
    }

    /// Builder form of [`set_features`](Self::set_features).
    pub fn with_features(mut self, value: Array2<f64>) -> Result<Self, ResultsError> {
        self.set_features(Some(value))?;
        Ok(self)
    }

    /// Builder form of [`set_samples`](Self::set_samples).
    pub fn with_samples(mut self, value: Array2<f64>) -> Result<Self, ResultsError> {
        self.set_samples(Some(value))?;
        Ok(self)
    }

    /// Builder form of [`set_biplot_scores`](Self::set_biplot_scores).
    pub fn with_biplot_scores(mut self, value: Array2<f64>) -> Result<Self, ResultsError> {
        self.set_biplot_scores(Some(value))?;
        Ok(self)
    }

    /// Builder form of [`set_sample_constraints`](Self::set_sample_constraints).
    pub fn with_sample_constraints(mut self, value: Array2<f64>) -> Result<Self, ResultsError> {
        self.set_sample_constraints(Some(value))?;
        Ok(self)
    }

    /// Builder form of [`set_proportion_explained`](Self::set_proportion_explained).
    pub fn with_proportion_explained(mut self, value: Array1<f64>) -> Result<Self, ResultsError> {
        self.set_proportion_explained(Some(value))?;
        Ok(self)
    }

    /// Checks that every numeric field holds finite values only.
    ///
    /// Setters already enforce this for optional fields; deserialized
    /// results and the public mandatory fields are checked here.
    pub fn validate(&self) -> Result<(), ResultsError> {
        ensure_finite("eigvals", self.eigvals.iter())?;
        ensure_finite("site", self.site.iter())?;
        for field in MatrixField::ALL {
            if let Some(m) = self.matrix(field) {
                ensure_finite(field.as_str(), m.iter())?;
            }
        }
        if let Some(v) = &self.proportion_explained {
            ensure_finite(OptionalField::ProportionExplained.as_str(), v.iter())?;
        }
        Ok(())
    }
}

fn ensure_finite<'a>(
    field: &'static str,
    mut values: impl Iterator<Item = &'a f64>,
) -> Result<(), ResultsError> {
    if values.all(|x| x.is_finite()) { Ok(()) } else { Err(ResultsError::NonFinite { field }) }
}

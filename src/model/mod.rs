//! Fitted models and the estimator seam.
//!
//! [`LinearModel`] is the fitted OLS model: a coefficient vector plus an
//! intercept. [`Estimator`] is the fit/predict/score interface it (and any
//! future estimator) implements.

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::training::metrics::{MetricError, MetricFn, RSquared};
use crate::training::FitError;

/// Errors from prediction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// Input width does not match the fitted feature count.
    #[error("input has {got} features, model was fitted on {expected}")]
    WidthMismatch { expected: usize, got: usize },
}

/// Errors from scoring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Predict(#[from] PredictError),
    #[error(transparent)]
    Metric(#[from] MetricError),
}

/// The fit / predict / score interface.
///
/// `score` defaults to R² of the model's predictions against the dataset's
/// targets, which is what every regression estimator here wants.
pub trait Estimator: Sized {
    /// Fit the estimator to a dataset.
    fn fit(dataset: &Dataset) -> Result<Self, FitError>;

    /// Evaluate the fitted estimator on a sample-major feature matrix.
    ///
    /// Predictions preserve input row order.
    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError>;

    /// Coefficient of determination on a labeled dataset.
    fn score(&self, dataset: &Dataset) -> Result<f64, ScoreError> {
        let predictions = self.predict(dataset.features())?;
        Ok(RSquared.compute(predictions.view(), dataset.targets())?)
    }
}

/// Fitted ordinary least squares model.
///
/// Immutable after fitting: one coefficient per feature plus an intercept.
/// Evaluation is `ŷ = X·β + b`; inputs outside the training range
/// extrapolate along the fitted hyperplane with no special handling.
///
/// # Example
///
/// ```
/// use linfit::{Dataset, Estimator, LinearModel};
/// use ndarray::array;
///
/// let dataset = Dataset::from_xy(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
/// let model = LinearModel::fit(&dataset).unwrap();
///
/// let predictions = model.predict(array![[4.0]].view()).unwrap();
/// assert!((predictions[0] - 9.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// One coefficient per feature.
    coefficients: Array1<f64>,
    /// Constant term.
    intercept: f64,
}

impl LinearModel {
    /// Assemble a model from its parts.
    ///
    /// Mostly useful for tests; for fitting from data use
    /// [`LinearModel::fit`].
    pub fn from_parts(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self { coefficients, intercept }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient vector, one entry per feature.
    #[inline]
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// Constant term of the fitted model.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluate the model for a single observation.
    ///
    /// # Errors
    ///
    /// [`PredictError::WidthMismatch`] if `x` has the wrong length.
    pub fn predict_one(&self, x: &[f64]) -> Result<f64, PredictError> {
        if x.len() != self.n_features() {
            return Err(PredictError::WidthMismatch {
                expected: self.n_features(),
                got: x.len(),
            });
        }
        let dot: f64 = x
            .iter()
            .zip(self.coefficients.iter())
            .map(|(&xi, &ci)| xi * ci)
            .sum();
        Ok(dot + self.intercept)
    }
}

impl Estimator for LinearModel {
    fn fit(dataset: &Dataset) -> Result<Self, FitError> {
        crate::training::fit(dataset)
    }

    fn predict(&self, features: ArrayView2<'_, f64>) -> Result<Array1<f64>, PredictError> {
        if features.ncols() != self.n_features() {
            return Err(PredictError::WidthMismatch {
                expected: self.n_features(),
                got: features.ncols(),
            });
        }
        let mut predictions = features.dot(&self.coefficients);
        predictions += self.intercept;
        Ok(predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn predict_applies_line() {
        let model = LinearModel::from_parts(array![2.0], 1.0);
        let predictions = model.predict(array![[0.0], [1.5], [-3.0]].view()).unwrap();
        assert_abs_diff_eq!(predictions[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(predictions[1], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(predictions[2], -5.0, epsilon = 1e-12);
    }

    #[test]
    fn predict_preserves_order_multi_feature() {
        let model = LinearModel::from_parts(array![1.0, -1.0], 0.5);
        let predictions = model
            .predict(array![[2.0, 1.0], [0.0, 0.0]].view())
            .unwrap();
        assert_abs_diff_eq!(predictions[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(predictions[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn predict_rejects_width_mismatch() {
        let model = LinearModel::from_parts(array![2.0], 1.0);
        let err = model.predict(array![[1.0, 2.0]].view()).unwrap_err();
        assert_eq!(err, PredictError::WidthMismatch { expected: 1, got: 2 });

        let err = model.predict_one(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, PredictError::WidthMismatch { expected: 1, got: 2 });
    }

    #[test]
    fn predict_one_matches_batch() {
        let model = LinearModel::from_parts(array![3.0, -2.0], 4.0);
        let batch = model.predict(array![[1.0, 2.0]].view()).unwrap();
        let single = model.predict_one(&[1.0, 2.0]).unwrap();
        assert_abs_diff_eq!(batch[0], single, epsilon = 1e-12);
    }
}

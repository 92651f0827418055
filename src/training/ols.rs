//! Ordinary least squares fitting via the normal equations.
//!
//! The fit prepends an intercept column to the feature matrix, forms
//! `XᵀX` and `Xᵀy`, and solves `(XᵀX)·β = Xᵀy` with an LUP factorization.
//! For a single feature this is mathematically equivalent to the closed
//! form `slope = Cov(x, y) / Var(x)`; the normal-equations path is used
//! for every width so fitting behaves identically for p = 1 and p > 1.

use ndarray::{s, Array2};

use crate::data::Dataset;
use crate::linalg::{LinalgError, Lup};
use crate::model::LinearModel;

/// Errors from fitting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FitError {
    /// Fitting a line needs at least two samples.
    #[error("need at least 2 samples to fit, got {got}")]
    TooFewSamples { got: usize },

    /// The normal-equations matrix could not be factored. For a single
    /// feature this means the inputs have zero variance; in general the
    /// design matrix is rank-deficient.
    #[error("normal equations are singular: features have zero variance or are collinear")]
    Singular(#[source] LinalgError),
}

/// Fit an ordinary least squares model to a dataset.
///
/// Minimizes the sum of squared residuals between `X·β + b` and the
/// targets. The result is immutable; refitting means calling `fit` again.
///
/// # Errors
///
/// [`FitError::TooFewSamples`] for fewer than two samples,
/// [`FitError::Singular`] for a rank-deficient design matrix (for one
/// feature: all x-values identical).
///
/// # Example
///
/// ```
/// use linfit::{fit, Dataset};
///
/// let dataset = Dataset::from_xy(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// let model = fit(&dataset).unwrap();
/// assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
/// assert!(model.intercept().abs() < 1e-9);
/// ```
pub fn fit(dataset: &Dataset) -> Result<LinearModel, FitError> {
    let n_samples = dataset.n_samples();
    if n_samples < 2 {
        return Err(FitError::TooFewSamples { got: n_samples });
    }
    let n_features = dataset.n_features();

    // Design matrix with a leading column of ones for the intercept.
    let mut design = Array2::<f64>::ones((n_samples, n_features + 1));
    design.slice_mut(s![.., 1..]).assign(&dataset.features());

    let gram = design.t().dot(&design);
    let moment = design.t().dot(&dataset.targets());

    let factors = Lup::factor(gram.view()).map_err(FitError::Singular)?;
    let beta = factors.solve(moment.view());

    let intercept = beta[0];
    let coefficients = beta.slice(s![1..]).to_owned();
    Ok(LinearModel::from_parts(coefficients, intercept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    /// Closed-form simple regression, used as an independent oracle.
    fn closed_form(x: &[f64], y: &[f64]) -> (f64, f64) {
        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;
        let cov: f64 = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
            .sum();
        let var: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();
        let slope = cov / var;
        (slope, mean_y - slope * mean_x)
    }

    #[test]
    fn matches_closed_form_simple_regression() {
        let x = [0.5, 1.1, 1.9, 3.0, 4.2, 5.0];
        let y = [1.2, 2.3, 3.9, 6.4, 8.1, 10.2];
        let dataset = Dataset::from_xy(&x, &y).unwrap();
        let model = fit(&dataset).unwrap();

        let (slope, intercept) = closed_form(&x, &y);
        assert_abs_diff_eq!(model.coefficients()[0], slope, epsilon = 1e-9);
        assert_abs_diff_eq!(model.intercept(), intercept, epsilon = 1e-9);
    }

    #[test]
    fn recovers_exact_multi_feature_plane() {
        // y = 1 + 2*a + 3*b, noiseless
        let features = array![
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 3.0],
        ];
        let targets = features.map_axis(ndarray::Axis(1), |row| 1.0 + 2.0 * row[0] + 3.0 * row[1]);
        let dataset = Dataset::new(features, targets).unwrap();

        let model = fit(&dataset).unwrap();
        assert_abs_diff_eq!(model.intercept(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(model.coefficients()[0], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(model.coefficients()[1], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn too_few_samples() {
        let dataset = Dataset::from_xy(&[1.0], &[2.0]).unwrap();
        let err = fit(&dataset).unwrap_err();
        assert_eq!(err, FitError::TooFewSamples { got: 1 });
    }

    #[test]
    fn zero_variance_x_is_singular() {
        let dataset = Dataset::from_xy(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap();
        let err = fit(&dataset).unwrap_err();
        assert!(matches!(err, FitError::Singular(_)));
    }

    #[test]
    fn collinear_features_are_singular() {
        // Second feature is twice the first.
        let features = array![[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]];
        let dataset = Dataset::new(features, array![1.0, 2.0, 3.0]).unwrap();
        let err = fit(&dataset).unwrap_err();
        assert!(matches!(err, FitError::Singular(_)));
    }
}

//! Dataset container for regression data.
//!
//! This module provides [`Dataset`], the input container for fitting.
//!
//! # Storage Layout
//!
//! Features are stored in **sample-major** layout: `[n_samples, n_features]`.
//! Each row is one observation, matching the design-matrix orientation the
//! normal equations consume.
//!
//! All values must be finite; violations are reported as [`DatasetError`]
//! at construction time rather than surfacing as NaN coefficients later.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Errors from dataset construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    /// The feature matrix has no columns.
    #[error("dataset has no feature columns")]
    EmptyFeatures,

    /// Targets length does not match the number of samples.
    #[error("targets have length {got}, expected {expected} (one per sample)")]
    ShapeMismatch { expected: usize, got: usize },

    /// A feature value is NaN or infinite.
    #[error("non-finite feature value at sample {sample}, feature {feature}")]
    NonFiniteFeature { sample: usize, feature: usize },

    /// A target value is NaN or infinite.
    #[error("non-finite target value at sample {sample}")]
    NonFiniteTarget { sample: usize },
}

/// Container pairing a feature matrix with its target vector.
///
/// # Example
///
/// ```
/// use linfit::Dataset;
/// use ndarray::array;
///
/// // 3 samples, 2 features
/// let features = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
/// let targets = array![0.5, 1.5, 2.5];
/// let ds = Dataset::new(features, targets).unwrap();
///
/// assert_eq!(ds.n_samples(), 3);
/// assert_eq!(ds.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_samples, n_features]` (sample-major).
    features: Array2<f64>,
    /// Target values: length = n_samples.
    targets: Array1<f64>,
}

impl Dataset {
    /// Create a dataset from a sample-major feature matrix and targets.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - the feature matrix has zero columns
    /// - targets length differs from the number of samples
    /// - any feature or target value is NaN or infinite
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Result<Self, DatasetError> {
        if features.ncols() == 0 {
            return Err(DatasetError::EmptyFeatures);
        }
        if targets.len() != features.nrows() {
            return Err(DatasetError::ShapeMismatch {
                expected: features.nrows(),
                got: targets.len(),
            });
        }
        for ((sample, feature), &value) in features.indexed_iter() {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteFeature { sample, feature });
            }
        }
        for (sample, &value) in targets.iter().enumerate() {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteTarget { sample });
            }
        }
        Ok(Self { features, targets })
    }

    /// Create a single-feature dataset from paired slices.
    ///
    /// Convenience constructor for simple regression: each `x[i]` becomes a
    /// one-column row, paired with `y[i]`.
    ///
    /// # Errors
    ///
    /// Same validation as [`Dataset::new`]; mismatched slice lengths are a
    /// [`DatasetError::ShapeMismatch`].
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, DatasetError> {
        if x.len() != y.len() {
            return Err(DatasetError::ShapeMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        let features = Array2::from_shape_vec((x.len(), 1), x.to_vec())
            .expect("n*1 shape always matches an n-element vec");
        let targets = Array1::from_vec(y.to_vec());
        Self::new(features, targets)
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of features (columns).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature matrix view, `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Target vector view, length `n_samples`.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }
}

//! linfit: ordinary least squares linear regression for Rust.
//!
//! Fits linear models by solving the normal equations with an LUP
//! factorization, and scores them with standard regression metrics.
//!
//! # Key Types
//!
//! - [`LinearModel`] - Fitted model with predict/score
//! - [`Estimator`] - The fit/predict/score seam
//! - [`Dataset`] - Data handling
//! - [`RSquared`] / [`Rmse`] / [`Mae`] - Evaluation metrics
//!
//! # Fitting
//!
//! Build a [`Dataset`], then call [`LinearModel::fit`]. See the [`model`]
//! module for details.
//!
//! ```
//! use linfit::{Dataset, Estimator, LinearModel};
//!
//! let dataset = Dataset::from_xy(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
//! let model = LinearModel::fit(&dataset).unwrap();
//! assert!((model.coefficients()[0] - 2.0).abs() < 1e-9);
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod linalg;
pub mod model;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{Estimator, LinearModel, PredictError, ScoreError};

// Training types (fit entry point, metrics)
pub use training::metrics::{Mae, MetricError, MetricFn, RSquared, Rmse};
pub use training::{fit, FitError};

// Data types (for preparing training data)
pub use data::{Dataset, DatasetError};

// Linear algebra (LUP factorization)
pub use linalg::{LinalgError, Lup};

//! Model fitting and evaluation.
//!
//! [`fit`] solves the ordinary least squares problem for a [`Dataset`];
//! [`metrics`] holds the regression metrics used to evaluate the result.
//!
//! [`Dataset`]: crate::data::Dataset

pub mod metrics;
mod ols;

pub use ols::{fit, FitError};

//! Regression metrics.
//!
//! Metrics for evaluating fitted-model quality against labeled data.

use ndarray::ArrayView1;

/// Errors from metric computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricError {
    /// Predictions and targets must pair up one-to-one.
    #[error("predictions have length {got}, targets have length {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// R² is undefined for a constant target (zero total sum of squares).
    #[error("coefficient of determination is undefined for a constant target")]
    ConstantTarget,
}

/// A regression metric over paired predictions and targets.
pub trait MetricFn {
    /// Compute the metric value.
    fn compute(
        &self,
        predictions: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, MetricError>;

    /// Whether larger values indicate a better fit.
    fn higher_is_better(&self) -> bool;

    /// Short machine-readable name.
    fn name(&self) -> &'static str;
}

fn check_lengths(
    predictions: ArrayView1<'_, f64>,
    targets: ArrayView1<'_, f64>,
) -> Result<(), MetricError> {
    if predictions.len() != targets.len() {
        return Err(MetricError::LengthMismatch {
            expected: targets.len(),
            got: predictions.len(),
        });
    }
    Ok(())
}

// =============================================================================
// R² (Coefficient of Determination)
// =============================================================================

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// 1.0 for a perfect fit, 0.0 for a fit no better than the target mean;
/// can go negative for a fit worse than the mean. Higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct RSquared;

impl MetricFn for RSquared {
    fn compute(
        &self,
        predictions: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, MetricError> {
        check_lengths(predictions, targets)?;
        let n = targets.len();
        if n == 0 {
            return Err(MetricError::ConstantTarget);
        }

        let mean = targets.sum() / n as f64;
        let ss_tot: f64 = targets.iter().map(|&y| (y - mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return Err(MetricError::ConstantTarget);
        }
        let ss_res: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &y)| (y - p).powi(2))
            .sum();

        Ok(1.0 - ss_res / ss_tot)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "r2"
    }
}

// =============================================================================
// RMSE (Root Mean Squared Error)
// =============================================================================

/// Root Mean Squared Error: `sqrt(mean((pred - target)²))`.
///
/// Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl MetricFn for Rmse {
    fn compute(
        &self,
        predictions: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, MetricError> {
        check_lengths(predictions, targets)?;
        let n = targets.len();
        if n == 0 {
            return Ok(0.0);
        }
        let sum_sq: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &y)| (p - y).powi(2))
            .sum();
        Ok((sum_sq / n as f64).sqrt())
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

// =============================================================================
// MAE (Mean Absolute Error)
// =============================================================================

/// Mean Absolute Error: `mean(|pred - target|)`.
///
/// Lower is better. More robust to outliers than RMSE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl MetricFn for Mae {
    fn compute(
        &self,
        predictions: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<f64, MetricError> {
        check_lengths(predictions, targets)?;
        let n = targets.len();
        if n == 0 {
            return Ok(0.0);
        }
        let sum_abs: f64 = predictions
            .iter()
            .zip(targets.iter())
            .map(|(&p, &y)| (p - y).abs())
            .sum();
        Ok(sum_abs / n as f64)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // =========================================================================
    // R² tests
    // =========================================================================

    #[test]
    fn r_squared_perfect() {
        let preds = array![1.0, 2.0, 3.0];
        let targets = array![1.0, 2.0, 3.0];
        let r2 = RSquared.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(r2, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_mean_prediction_is_zero() {
        // Predicting the target mean everywhere explains no variance.
        let preds = array![2.0, 2.0, 2.0];
        let targets = array![1.0, 2.0, 3.0];
        let r2 = RSquared.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(r2, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_known_value() {
        // SS_res = 0.5, SS_tot = 2 → R² = 0.75
        let preds = array![1.5, 2.0, 2.5];
        let targets = array![1.0, 2.0, 3.0];
        let r2 = RSquared.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(r2, 0.75, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_constant_target_is_error() {
        let preds = array![1.0, 2.0];
        let targets = array![5.0, 5.0];
        let err = RSquared.compute(preds.view(), targets.view()).unwrap_err();
        assert_eq!(err, MetricError::ConstantTarget);
    }

    #[test]
    fn r_squared_length_mismatch() {
        let preds = array![1.0];
        let targets = array![1.0, 2.0];
        let err = RSquared.compute(preds.view(), targets.view()).unwrap_err();
        assert_eq!(err, MetricError::LengthMismatch { expected: 2, got: 1 });
    }

    // =========================================================================
    // RMSE tests
    // =========================================================================

    #[test]
    fn rmse_perfect() {
        let preds = array![1.0, 2.0, 3.0];
        let targets = array![1.0, 2.0, 3.0];
        let rmse = Rmse.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(rmse, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rmse_known_value() {
        // RMSE of [1, 2] vs [0, 0] = sqrt((1 + 4) / 2) = sqrt(2.5)
        let preds = array![1.0, 2.0];
        let targets = array![0.0, 0.0];
        let rmse = Rmse.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(rmse, 2.5_f64.sqrt(), epsilon = 1e-12);
    }

    // =========================================================================
    // MAE tests
    // =========================================================================

    #[test]
    fn mae_known_value() {
        // MAE of [1, 2] vs [0, 0] = (1 + 2) / 2 = 1.5
        let preds = array![1.0, 2.0];
        let targets = array![0.0, 0.0];
        let mae = Mae.compute(preds.view(), targets.view()).unwrap();
        assert_abs_diff_eq!(mae, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn metric_properties() {
        assert!(RSquared.higher_is_better());
        assert!(!Rmse.higher_is_better());
        assert!(!Mae.higher_is_better());

        assert_eq!(RSquared.name(), "r2");
        assert_eq!(Rmse.name(), "rmse");
        assert_eq!(Mae.name(), "mae");
    }
}

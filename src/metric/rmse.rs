use crate::error::{RmseError, RmseResult};

/// Root mean squared error between an observed and a predicted sequence.
///
/// Both slices are index-aligned: `predicted[i]` is the estimate for
/// `observed[i]`. NaN and infinite inputs are not special-cased and
/// propagate into the result.
pub struct Rmse;

impl Rmse {
    /// Scalar RMSE: sqrt(mean((predicted - observed)²))
    pub fn compute(observed: &[f64], predicted: &[f64]) -> RmseResult<f64> {
        let rmse = Self::mean_squared_error(observed, predicted)?.sqrt();

        tracing::debug!(samples = observed.len(), rmse, "computed rmse");
        if !rmse.is_finite() {
            tracing::warn!(rmse, "rmse is not finite; inputs contain NaN or infinity");
        }
        Ok(rmse)
    }

    /// Scalar MSE: mean((predicted - observed)²)
    pub fn mean_squared_error(observed: &[f64], predicted: &[f64]) -> RmseResult<f64> {
        let sq_errors = Self::squared_errors(observed, predicted)?;
        let n = sq_errors.len() as f64;
        Ok(sq_errors.iter().sum::<f64>() / n)
    }

    /// Per-sample squared error: (predicted[i] - observed[i])²
    pub fn squared_errors(observed: &[f64], predicted: &[f64]) -> RmseResult<Vec<f64>> {
        check_aligned(observed, predicted)?;
        Ok(observed.iter().zip(predicted.iter())
            .map(|(o, p)| (p - o).powi(2))
            .collect())
    }
}

/// Shorthand for [`Rmse::compute`].
pub fn rmse(observed: &[f64], predicted: &[f64]) -> RmseResult<f64> {
    Rmse::compute(observed, predicted)
}

// Length is checked before emptiness, so `[]` vs `[x]` is a mismatch.
fn check_aligned(observed: &[f64], predicted: &[f64]) -> RmseResult<()> {
    if observed.len() != predicted.len() {
        return Err(RmseError::LengthMismatch {
            observed: observed.len(),
            predicted: predicted.len(),
        });
    }
    if observed.is_empty() {
        return Err(RmseError::EmptyInput);
    }
    Ok(())
}

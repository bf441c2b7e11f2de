use serde::{Serialize, Deserialize};

use crate::error::RmseResult;
use crate::metric::rmse::Rmse;

/// Summary of one RMSE evaluation.
///
/// Carries the intermediate mean squared error next to the final value so
/// callers can log or serialize both without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RmseReport {
    /// Number of aligned (observed, predicted) pairs.
    pub samples: usize,
    /// Mean of the squared errors.
    pub mse: f64,
    /// Square root of `mse`.
    pub rmse: f64,
}

impl RmseReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> RmseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Rmse {
    /// Evaluates both MSE and RMSE over the same inputs.
    pub fn report(observed: &[f64], predicted: &[f64]) -> RmseResult<RmseReport> {
        let mse = Self::mean_squared_error(observed, predicted)?;
        let report = RmseReport {
            samples: observed.len(),
            mse,
            rmse: mse.sqrt(),
        };
        tracing::debug!(samples = report.samples, mse = report.mse, rmse = report.rmse, "built rmse report");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RmseError;

    #[test]
    fn report_matches_compute() {
        let observed = [0.0, 0.0];
        let predicted = [3.0, 4.0];
        let report = Rmse::report(&observed, &predicted).unwrap();

        assert_eq!(report.samples, 2);
        assert!((report.mse - 12.5).abs() < 1e-12);
        assert_eq!(report.rmse, report.mse.sqrt());
        assert_eq!(report.rmse, Rmse::compute(&observed, &predicted).unwrap());
    }

    #[test]
    fn report_propagates_validation_errors() {
        assert!(matches!(
            Rmse::report(&[1.0], &[1.0, 2.0]),
            Err(RmseError::LengthMismatch { observed: 1, predicted: 2 })
        ));
        assert!(matches!(Rmse::report(&[], &[]), Err(RmseError::EmptyInput)));
    }

    #[test]
    fn json_contains_all_fields() {
        let report = RmseReport { samples: 2, mse: 12.5, rmse: 12.5f64.sqrt() };
        let json = report.to_json().unwrap();

        let back: RmseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["samples"], 2);
        assert_eq!(value["mse"], 12.5);
    }
}

//! Core trait for proportion confidence interval estimation

use crate::types::ProportionCIResult;
use proportion_core::{Error, Result};

/// Confidence interval estimator for a binomial proportion
///
/// Implementations are pure: the same counts always give the same interval
/// and nothing outside the returned value is touched.
pub trait ProportionIntervalEstimator {
    /// Calculate the interval for `successes` out of `trials`
    ///
    /// # Errors
    /// Fails with [`Error::InvalidParameter`] when `successes > trials` and
    /// with [`Error::DegenerateInput`] when `trials == 0`.
    ///
    /// # Precision
    /// Counts are converted to `f64`, which is exact only up to 2^53.
    /// Beyond that, neighbouring counts can map to the same float, so the
    /// estimate stops being strictly monotone in `successes`, and with
    /// `successes == trials` near `u64::MAX` the adjusted estimate rounds
    /// to exactly 1.0 with a zero-width interval.
    fn estimate(&self, successes: u64, trials: u64) -> Result<ProportionCIResult>;

    /// Calculate the interval from signed counts
    ///
    /// Negative counts are rejected with [`Error::InvalidParameter`] before
    /// delegating to [`estimate`](Self::estimate).
    fn estimate_signed(&self, successes: i64, trials: i64) -> Result<ProportionCIResult> {
        let trials = u64::try_from(trials).map_err(|_| Error::negative_count("trials", trials))?;
        let successes =
            u64::try_from(successes).map_err(|_| Error::negative_count("successes", successes))?;
        self.estimate(successes, trials)
    }

    /// Get the confidence level
    fn confidence_level(&self) -> f64;
}

/// Check that `successes` out of `trials` can be estimated from.
pub fn validate_counts(successes: u64, trials: u64) -> Result<()> {
    if successes > trials {
        return Err(Error::successes_exceed_trials(successes, trials));
    }
    if trials == 0 {
        return Err(Error::no_trials());
    }
    Ok(())
}

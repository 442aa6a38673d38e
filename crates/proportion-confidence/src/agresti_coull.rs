//! Agresti–Coull interval for a binomial proportion
//!
//! The interval is a Wald interval computed on an adjusted sample: `z²`
//! extra trials are added, half of them successes. This keeps the closed
//! form of the normal approximation while fixing the poor coverage of the
//! plain Wald interval near 0 and 1.
//!
//! The point estimate returned is the adjusted proportion
//! `(successes + z²/2) / (trials + z²)`. Callers that want the raw
//! `successes / trials` must compute it themselves.

use crate::normal::two_sided_critical_value;
use crate::traits::{validate_counts, ProportionIntervalEstimator};
use crate::types::{ConfidenceLevel, ProportionCIResult};
use proportion_core::Result;

/// Agresti–Coull confidence interval estimator
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AgrestiCoull {
    confidence_level: ConfidenceLevel,
}

impl AgrestiCoull {
    /// Create an estimator for the given confidence level
    ///
    /// # Errors
    /// Returns [`proportion_core::Error::InvalidParameter`] unless
    /// `confidence_level` lies strictly inside `(0, 1)`.
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self::with_level(ConfidenceLevel::new(confidence_level)?))
    }

    /// Create an estimator from an already validated level
    pub fn with_level(confidence_level: ConfidenceLevel) -> Self {
        Self { confidence_level }
    }

    /// The validated confidence level
    pub fn level(&self) -> ConfidenceLevel {
        self.confidence_level
    }
}

impl ProportionIntervalEstimator for AgrestiCoull {
    fn estimate(&self, successes: u64, trials: u64) -> Result<ProportionCIResult> {
        validate_counts(successes, trials)?;

        let z = two_sided_critical_value(self.confidence_level)?;
        let z2 = z * z;

        let n_adj = trials as f64 + z2;
        let p_adj = (successes as f64 + z2 / 2.0) / n_adj;
        let margin = z * (p_adj * (1.0 - p_adj) / n_adj).sqrt();

        Ok(ProportionCIResult::new(p_adj, p_adj - margin, p_adj + margin))
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level.value()
    }
}

/// Agresti–Coull interval for `successes` out of `trials`
///
/// The confidence level is validated first, then the counts; no arithmetic
/// is done on invalid input.
pub fn agresti_coull_interval(
    successes: u64,
    trials: u64,
    confidence_level: f64,
) -> Result<ProportionCIResult> {
    AgrestiCoull::new(confidence_level)?.estimate(successes, trials)
}

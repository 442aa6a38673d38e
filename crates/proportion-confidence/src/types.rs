//! Common types for proportion confidence intervals

use proportion_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Confidence interval for a binomial proportion
///
/// Bounds are reported exactly as the interval method produced them. Normal
/// approximations can place `lower_bound` below 0 or `upper_bound` above 1
/// for counts at the edges; use [`ProportionCIResult::clamped`] when the
/// interval is shown to people.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProportionCIResult {
    p_adjusted: f64,
    upper_bound: f64,
    lower_bound: f64,
}

impl ProportionCIResult {
    pub(crate) fn new(p_adjusted: f64, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            p_adjusted,
            upper_bound,
            lower_bound,
        }
    }

    /// Point estimate produced by the interval method.
    ///
    /// For Agresti–Coull this is the adjusted proportion, not the raw
    /// `successes / trials`.
    pub fn p_adjusted(&self) -> f64 {
        self.p_adjusted
    }

    /// Upper bound of the interval
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Lower bound of the interval
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a proportion is contained in the interval
    pub fn contains(&self, p: f64) -> bool {
        p >= self.lower_bound && p <= self.upper_bound
    }

    /// Whether either bound lies outside `[0, 1]`
    pub fn is_out_of_range(&self) -> bool {
        self.lower_bound < 0.0 || self.upper_bound > 1.0
    }

    /// Copy of this interval with both bounds clamped to `[0, 1]`
    pub fn clamped(&self) -> Self {
        Self {
            p_adjusted: self.p_adjusted,
            upper_bound: self.upper_bound.clamp(0.0, 1.0),
            lower_bound: self.lower_bound.clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for ProportionCIResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = {:.4}, CI: [{:.4}, {:.4}]",
            self.p_adjusted, self.lower_bound, self.upper_bound
        )
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] unless `level` is finite and
    /// strictly between 0 and 1.
    pub fn new(level: f64) -> Result<Self> {
        if level.is_finite() && level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence_level(level))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

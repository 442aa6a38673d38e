//! Standard normal critical values

use crate::ConfidenceLevel;
use proportion_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided critical value `z = Φ⁻¹(1 - α/2)` of the standard normal
/// distribution for the given confidence level.
pub fn two_sided_critical_value(level: ConfidenceLevel) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    let z = normal.inverse_cdf(1.0 - level.tail_probability());

    if !z.is_finite() {
        return Err(Error::Computation(format!(
            "Normal quantile for confidence level {} is not finite",
            level.value()
        )));
    }

    Ok(z)
}

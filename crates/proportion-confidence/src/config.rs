//! Typed configuration for interval estimation runs

use crate::{AgrestiCoull, ConfidenceLevel, ProportionCIResult, ProportionIntervalEstimator};
use proportion_core::{Result, TypedConfig};
use serde::{Deserialize, Serialize};

fn default_confidence_level() -> f64 {
    ConfidenceLevel::NINETY_FIVE.value()
}

/// Settings for computing proportion intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalConfig {
    /// Confidence level, strictly inside (0, 1)
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Clamp reported bounds to [0, 1]
    #[serde(default)]
    pub clamp_bounds: bool,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            confidence_level: default_confidence_level(),
            clamp_bounds: false,
        }
    }
}

impl TypedConfig for IntervalConfig {
    const NAME: &'static str = "IntervalConfig";
    const FIELDS: &'static [&'static str] = &["confidence_level", "clamp_bounds"];
}

impl IntervalConfig {
    /// Check the settings without building anything
    pub fn validate(&self) -> Result<()> {
        ConfidenceLevel::new(self.confidence_level).map(|_| ())
    }

    /// Build the estimator described by this config
    pub fn estimator(&self) -> Result<AgrestiCoull> {
        AgrestiCoull::new(self.confidence_level)
    }

    /// Estimate an interval and apply the configured clamping policy
    pub fn interval(&self, successes: u64, trials: u64) -> Result<ProportionCIResult> {
        let ci = self.estimator()?.estimate(successes, trials)?;
        Ok(if self.clamp_bounds { ci.clamped() } else { ci })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proportion_core::Error;
    use serde_json::json;

    #[test]
    fn test_defaults_from_empty_mapping() {
        let config = IntervalConfig::from_value(json!({})).unwrap();
        assert_eq!(config, IntervalConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let (config, unused) = IntervalConfig::from_value_reporting(json!({
            "confidence_level": 0.9,
            "method": "wilson",
        }))
        .unwrap();

        assert_eq!(config.confidence_level, 0.9);
        assert_eq!(unused, vec!["method".to_string()]);
    }

    #[test]
    fn test_invalid_level_fails_validation() {
        let config = IntervalConfig {
            confidence_level: 1.0,
            clamp_bounds: false,
        };
        assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
        assert!(config.estimator().is_err());
    }

    #[test]
    fn test_clamping_policy() {
        let raw = IntervalConfig::default().interval(0, 10).unwrap();
        assert!(raw.lower_bound() < 0.0);

        let config = IntervalConfig {
            clamp_bounds: true,
            ..IntervalConfig::default()
        };
        let clamped = config.interval(0, 10).unwrap();
        assert_eq!(clamped.lower_bound(), 0.0);
        assert_eq!(clamped.p_adjusted(), raw.p_adjusted());
    }
}

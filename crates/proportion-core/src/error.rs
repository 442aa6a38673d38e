//! Error types for proportion statistics
//!
//! Provides a unified error type for all proportion-stats crates.

use thiserror::Error;

/// Core error type for proportion-stats operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input that is well-typed but carries no information to estimate from
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Configuration could not be built or applied
    #[error("Config error: {0}")]
    Config(String),

    /// Serialization or deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a confidence level outside the open interval (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!(
            "confidence_level {level} must be strictly between 0 and 1"
        ))
    }

    /// Create an error for a negative count
    pub fn negative_count(field: &str, value: i64) -> Self {
        Self::InvalidParameter(format!("{field} {value} must be non-negative"))
    }

    /// Create an error for more successes than trials
    pub fn successes_exceed_trials(successes: u64, trials: u64) -> Self {
        Self::InvalidParameter(format!(
            "successes {successes} must not exceed trials {trials}"
        ))
    }

    /// Create an error for an estimate requested over zero trials
    pub fn no_trials() -> Self {
        Self::DegenerateInput("no trials: cannot estimate a proportion from 0 trials".to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::DegenerateInput("empty".to_string());
        assert_eq!(err.to_string(), "Degenerate input: empty");

        let err = Error::Computation("quantile failed".to_string());
        assert_eq!(err.to_string(), "Computation error: quantile failed");

        let err = Error::Config("missing key".to_string());
        assert_eq!(err.to_string(), "Config error: missing key");

        let err = Error::Serialization("bad yaml".to_string());
        assert_eq!(err.to_string(), "Serialization error: bad yaml");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_confidence_level(1.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: confidence_level 1 must be strictly between 0 and 1"
        );

        let err = Error::negative_count("trials", -3);
        assert_eq!(err.to_string(), "Invalid parameter: trials -3 must be non-negative");

        let err = Error::successes_exceed_trials(11, 10);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: successes 11 must not exceed trials 10"
        );

        match Error::no_trials() {
            Error::DegenerateInput(msg) => assert!(msg.contains("no trials")),
            other => panic!("Wrong error type: {other:?}"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_error_from_serde_yaml() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_every_variant_is_a_string_message() {
        // Each variant carries only its rendered message
        let variants = [
            Error::InvalidParameter("a".into()),
            Error::DegenerateInput("a".into()),
            Error::Computation("a".into()),
            Error::Config("a".into()),
            Error::Serialization("a".into()),
        ];
        for err in variants {
            let text = err.to_string();
            match err {
                Error::InvalidParameter(msg)
                | Error::DegenerateInput(msg)
                | Error::Computation(msg)
                | Error::Config(msg)
                | Error::Serialization(msg) => assert!(text.ends_with(&msg)),
            }
        }
    }
}

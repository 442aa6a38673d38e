//! Binomial proportion statistics
//!
//! Umbrella crate re-exporting the proportion-stats workspace:
//!
//! - [`proportion_core`]: error type, typed configuration, logging setup and timing
//! - [`proportion_confidence`]: confidence intervals for binomial proportions
//!
//! ```rust
//! use proportion_stats::agresti_coull_interval;
//!
//! let ci = agresti_coull_interval(0, 10, 0.95).unwrap();
//! // Raw bounds are kept; clamp only for display
//! assert!(ci.lower_bound() < 0.0);
//! println!("{}", ci.clamped());
//! ```

pub use proportion_confidence;
pub use proportion_core;

pub use proportion_confidence::{
    agresti_coull_interval, AgrestiCoull, ConfidenceLevel, IntervalConfig, ProportionCIResult,
    ProportionIntervalEstimator,
};
pub use proportion_core::{Error, Result};

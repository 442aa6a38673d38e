//! Confidence intervals for binomial proportions
//!
//! Given a number of successes out of a number of independent trials, this
//! crate estimates the underlying success probability together with a
//! confidence interval.
//!
//! - **Agresti–Coull intervals**: a Wald interval on an adjusted sample,
//!   with `z²` pseudo-trials of which half are successes
//!
//! # Overview
//!
//! The estimators are pure functions of their inputs. Invalid input
//! (confidence level outside `(0, 1)`, more successes than trials) is
//! rejected with [`Error::InvalidParameter`](proportion_core::Error) and an
//! estimate over zero trials with
//! [`Error::DegenerateInput`](proportion_core::Error) instead of returning
//! the uninformative `p = 0.5`.
//!
//! Bounds are not clamped. For counts at the edges the lower bound can be
//! negative or the upper bound can exceed 1; call
//! [`ProportionCIResult::clamped`] before showing the interval to people.
//!
//! # Examples
//!
//! ```rust
//! use proportion_confidence::{agresti_coull, agresti_coull_interval, ProportionIntervalEstimator};
//!
//! let ci = agresti_coull_interval(5, 10, 0.95).unwrap();
//! assert!((ci.p_adjusted() - 0.5).abs() < 1e-12);
//! println!("95% CI: [{:.4}, {:.4}]", ci.lower_bound(), ci.upper_bound());
//!
//! // Reuse one estimator across many counts
//! let estimator = agresti_coull(0.99).unwrap();
//! assert_eq!(estimator.confidence_level(), 0.99);
//! let edge = estimator.estimate(0, 20).unwrap();
//! assert!(edge.lower_bound() < 0.0);
//! assert_eq!(edge.clamped().lower_bound(), 0.0);
//! ```

mod agresti_coull;
pub mod config;
mod normal;
mod traits;
mod types;

// Re-exports
pub use agresti_coull::{agresti_coull_interval, AgrestiCoull};
pub use config::IntervalConfig;
pub use normal::two_sided_critical_value;
pub use traits::{validate_counts, ProportionIntervalEstimator};
pub use types::{ConfidenceLevel, ProportionCIResult};

/// Agresti–Coull estimator for `confidence_level`, shorthand for
/// [`AgrestiCoull::new`]
pub fn agresti_coull(confidence_level: f64) -> proportion_core::Result<AgrestiCoull> {
    AgrestiCoull::new(confidence_level)
}

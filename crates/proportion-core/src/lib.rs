//! Shared foundations for proportion statistics
//!
//! This crate holds the pieces every other proportion-stats crate leans on:
//!
//! - [`Error`] / [`Result`]: the single error type used across the workspace
//! - [`config`]: building typed configuration from generic key/value trees,
//!   with warnings for keys the schema does not use
//! - [`logging`]: `tracing` subscriber setup and banner output
//! - [`timing`]: timestamps and a stopwatch with human readable output
//!
//! # Example
//!
//! ```rust
//! use proportion_core::config::TypedConfig;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Experiment {
//!     trials: u64,
//! }
//!
//! impl TypedConfig for Experiment {
//!     const NAME: &'static str = "Experiment";
//!     const FIELDS: &'static [&'static str] = &["trials"];
//! }
//!
//! let (exp, unused) = Experiment::from_value_reporting(json!({ "trials": 40, "gpu": true })).unwrap();
//! assert_eq!(exp.trials, 40);
//! assert_eq!(unused, vec!["gpu".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod timing;

// Re-export core types
pub use config::{log_config, to_yaml, TypedConfig};
pub use error::{Error, Result};
pub use logging::{init_default_logger, log_banner};
pub use timing::{format_duration, timestamp, Elapsed, ElapsedFormat, Stopwatch};

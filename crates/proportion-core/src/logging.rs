//! Subscriber setup and banner output
//!
//! Library code only emits `tracing` events; binaries and test harnesses
//! decide where they go by calling [`init_default_logger`] once.

use crate::{Error, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Width of the `=` rule printed around banners
pub const BANNER_WIDTH: usize = 80;

/// Install a global `fmt` subscriber writing to stdout.
///
/// The default level is `DEBUG` when `debug` is set and `INFO` otherwise.
/// A `RUST_LOG` directive in the environment takes precedence.
///
/// # Errors
/// Returns [`Error::Config`] if a global subscriber has already been set.
pub fn init_default_logger(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install log subscriber: {e}")))
}

/// Level directive used when `RUST_LOG` is unset
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Render a banner: a rule, the title, the body, and a closing rule.
pub fn banner(title: &str, body: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{title}\n\n{body}\n{rule}\n")
}

/// Emit [`banner`] at `INFO` level.
pub fn log_banner(title: &str, body: &str) {
    for line in banner(title, body).lines() {
        info!("{line}");
    }
}

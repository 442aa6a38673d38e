//! Wall-clock helpers for run bookkeeping

use chrono::Local;
use std::fmt;
use std::time::{Duration, Instant};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Current local time as `YYYYmmddHHMMSS`, suitable for run directory names.
pub fn timestamp() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

/// How [`Stopwatch::time`] should report the elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElapsedFormat {
    /// Total elapsed seconds as a float
    #[default]
    Seconds,
    /// Microsecond component of the elapsed time
    Microseconds,
    /// Human readable text, see [`format_duration`]
    Display,
}

/// Elapsed time in the representation requested by [`ElapsedFormat`]
#[derive(Debug, Clone, PartialEq)]
pub enum Elapsed {
    Seconds(f64),
    Microseconds(u32),
    Display(String),
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(s) => write!(f, "{s} seconds"),
            Self::Microseconds(us) => write!(f, "{us} microseconds"),
            Self::Display(text) => f.write_str(text),
        }
    }
}

/// A stopwatch started at construction
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time since the stopwatch was started
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Total elapsed seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Microsecond component of the elapsed time (not the total)
    pub fn elapsed_subsec_micros(&self) -> u32 {
        self.elapsed().subsec_micros()
    }

    /// Elapsed time as human readable text
    pub fn elapsed_display(&self) -> String {
        format_duration(self.elapsed())
    }

    /// Elapsed time in the requested format
    pub fn time(&self, format: ElapsedFormat) -> Elapsed {
        let elapsed = self.elapsed();
        match format {
            ElapsedFormat::Seconds => Elapsed::Seconds(elapsed.as_secs_f64()),
            ElapsedFormat::Microseconds => Elapsed::Microseconds(elapsed.subsec_micros()),
            ElapsedFormat::Display => Elapsed::Display(format_duration(elapsed)),
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration for humans.
///
/// Durations of at most one second are shown in microseconds. Longer ones
/// are broken into days, hours, minutes and seconds, where a unit is shown
/// once it or any larger unit is non-zero and seconds are always shown.
pub fn format_duration(duration: Duration) -> String {
    if duration.as_secs_f64() <= 1.0 {
        return format!("{} microseconds", duration.as_micros());
    }

    let whole = duration.as_secs();
    let days = whole / SECONDS_PER_DAY;
    let hours = (whole % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = (whole % SECONDS_PER_MINUTE) as f64 + f64::from(duration.subsec_nanos()) / 1e9;

    let mut output = String::new();
    if days > 0 {
        output.push_str(&format!("{days} days, "));
    }
    if hours > 0 || days > 0 {
        output.push_str(&format!("{hours} hours, "));
    }
    if minutes > 0 || hours > 0 || days > 0 {
        output.push_str(&format!("{minutes} minutes, "));
    }
    output.push_str(&format!("{seconds:.3} seconds"));
    output
}

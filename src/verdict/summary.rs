use std::fmt;
use std::io::{self, Write};

use super::BenchResults;
use crate::compare::geometric_mean;

/// Geometric means of the two runs' durations and throughputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean_duration: f64,
    pub mean_throughput: f64,
}

impl From<&BenchResults> for Summary {
    fn from(r: &BenchResults) -> Self {
        Self {
            mean_duration: geometric_mean(r.after.duration, r.before.duration),
            mean_throughput: geometric_mean(r.after.throughput, r.before.throughput),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "{:<50}{} (seconds avg)",
            "geometric_mean_average_duration:",
            format_scientific(self.mean_duration)
        )?;
        writeln!(
            f,
            "{:<50}{} (flops avg)",
            "geometric_mean_average_flops:",
            format_scientific(self.mean_throughput)
        )?;
        writeln!(f)
    }
}

/// Writes the [`Summary`] when dropped, to stdout unless built with
/// [`SummaryGuard::with_writer`].
///
/// Hold it for as long as the checks run; the summary is emitted whatever
/// their outcome.
#[must_use = "the summary is printed when the guard is dropped"]
pub struct SummaryGuard<W: Write = io::Stdout> {
    results: BenchResults,
    out: W,
}

impl SummaryGuard {
    pub fn new(results: BenchResults) -> Self {
        Self::with_writer(results, io::stdout())
    }
}

impl<W: Write> SummaryGuard<W> {
    pub fn with_writer(results: BenchResults, out: W) -> Self {
        Self { results, out }
    }

    pub fn results(&self) -> &BenchResults {
        &self.results
    }
}

impl<W: Write> Drop for SummaryGuard<W> {
    fn drop(&mut self) {
        // Nowhere to report a failed write during teardown.
        let _ = write!(self.out, "{}", Summary::from(&self.results));
        let _ = self.out.flush();
    }
}

/// Formats like C's `%e`: six fractional digits, signed exponent of at
/// least two digits (`1.500000e-03`).
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

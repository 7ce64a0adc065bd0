//! Generate → time → multiply → reduce, for one kernel variant.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::blocked::tiled::multiply_blocked;
use crate::config::RunConfig;
use crate::matrix::generate::{generate_pattern, generate_zeros};
use crate::matrix::naive_ijk::multiply_naive;
use crate::matrix::{Element, Matrix};

/// Shortest duration a run may report, in seconds.
///
/// Elapsed times below this are clamped so throughput stays finite.
pub const MIN_MEASURABLE_SECS: f64 = 1e-9;

/// Which kernel a run exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Naive,
    Blocked,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Naive => write!(f, "naive"),
            Variant::Blocked => write!(f, "blocked"),
        }
    }
}

/// Summary of one timed multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    /// Largest element of the product matrix.
    pub max_element: f64,
    /// Kernel wall time in seconds.
    pub duration: f64,
    /// FLOP/s: 2·N³ over `duration`.
    pub throughput: f64,
}

/// Floors `elapsed` seconds at [`MIN_MEASURABLE_SECS`].
pub fn measured_duration(elapsed: f64) -> f64 {
    if elapsed < MIN_MEASURABLE_SECS {
        warn!(elapsed, "elapsed time below clock resolution, clamping");
        MIN_MEASURABLE_SECS
    } else {
        elapsed
    }
}

/// Runs one variant on freshly generated inputs and returns its summary.
///
/// X is zeroed, Y and Z get the `i * j` pattern. Only the kernel call is
/// timed, with the monotonic clock, for both variants. The three matrices
/// are dropped before returning.
pub fn run<T: Element>(config: &RunConfig, variant: Variant) -> RunResult {
    let n = config.size();
    let mut x = Matrix::<T>::new(n);
    let mut y = Matrix::<T>::new(n);
    let mut z = Matrix::<T>::new(n);

    generate_zeros(&mut x);
    generate_pattern(&mut y);
    generate_pattern(&mut z);

    debug!(%variant, size = n, block_size = config.block_size(), "starting kernel");

    let start = Instant::now();
    match variant {
        Variant::Naive => multiply_naive(&mut x, &y, &z),
        Variant::Blocked => multiply_blocked(&mut x, &y, &z, config.block_size()),
    }
    let duration = measured_duration(start.elapsed().as_secs_f64());

    let result = RunResult {
        max_element: x.max_element().as_f64(),
        duration,
        throughput: config.flop_count() / duration,
    };
    info!(
        %variant,
        max_element = result.max_element,
        duration = result.duration,
        throughput = result.throughput,
        "run finished"
    );
    result
}

//! Named checks over the two runs, evaluated once, plus the summary
//! printed when the results go out of scope.
//!
//! The kernels run a single time in [`BenchResults::collect`]; every check
//! and the final summary read the same two [`RunResult`]s.

pub mod check;
pub mod report;
pub mod summary;

pub use check::{Check, CheckKind, Expectation, Outcome, standard_suite};
pub use report::{CheckReport, PerfPolicy, Report, Status, run_suite};
pub use summary::{Summary, SummaryGuard, format_scientific};

use crate::config::RunConfig;
use crate::matrix::{Element, Precision};
use crate::run::{RunResult, Variant, run};

/// The naive (`before`) and blocked (`after`) results of one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchResults {
    pub before: RunResult,
    pub after: RunResult,
    /// Element type both kernels ran in; `max_element` is widened from it.
    pub precision: Precision,
}

impl BenchResults {
    /// Times the naive kernel, then the blocked one, strictly in that order.
    pub fn collect<T: Element>(config: &RunConfig) -> Self {
        let before = run::<T>(config, Variant::Naive);
        let after = run::<T>(config, Variant::Blocked);
        Self {
            before,
            after,
            precision: T::PRECISION,
        }
    }

    /// Wraps results computed in `f64`.
    pub fn from_runs(before: RunResult, after: RunResult) -> Self {
        Self {
            before,
            after,
            precision: Precision::F64,
        }
    }

    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }
}

//! Does cache blocking pay off for a plain square matmul?
//!
//! This crate runs the textbook i-j-k multiply and a j/k-tiled version on
//! the same deterministic inputs, times both, and turns the two timings
//! into pass/fail verdicts: the tiled result must match the naive one, and
//! it must be faster.
//!
//! ## Usage
//!
//! ```
//! use tilebench::{RunConfig, standard_suite, run_suite, BenchResults, PerfPolicy};
//!
//! let config = RunConfig::new(32, 8).unwrap();
//! let results = BenchResults::collect::<f64>(&config);
//! let report = run_suite(&standard_suite(), &results, PerfPolicy::Advisory);
//!
//! assert_eq!(results.before.max_element, results.after.max_element);
//! assert!(report.all_passed());
//! ```
//!
//! The kernels can also be called directly:
//!
//! ```
//! use tilebench::matrix::Matrix;
//! use tilebench::matrix::generate::generate_pattern;
//! use tilebench::{multiply_blocked, multiply_naive};
//!
//! let mut y = Matrix::<f64>::new(4);
//! generate_pattern(&mut y);
//!
//! let mut naive = Matrix::new(4);
//! let mut tiled = Matrix::new(4);
//! multiply_naive(&mut naive, &y, &y);
//! multiply_blocked(&mut tiled, &y, &y, 2);
//!
//! assert_eq!(naive.max_element(), 126.0);
//! assert_eq!(naive, tiled);
//! ```

pub mod blocked;
pub mod compare;
pub mod config;
pub mod error;
pub mod matrix;
pub mod run;
pub mod verdict;

pub use blocked::tiled::multiply_blocked;
pub use config::RunConfig;
pub use error::{BenchError, Result};
pub use matrix::naive_ijk::multiply_naive;
pub use matrix::{Element, Matrix, Precision};
pub use run::{RunResult, Variant, run};
pub use verdict::{BenchResults, PerfPolicy, Report, SummaryGuard, run_suite, standard_suite};

/// Default matrix dimension N.
pub const SIZE: usize = 512;

/// Default tile edge for the blocked kernel.
pub const BLOCK_SIZE: usize = 8;

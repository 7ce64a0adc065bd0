//! Pure metrics over a `before` (naive) and `after` (blocked) run.

use approx::ulps_eq;

use crate::matrix::Precision;
use crate::run::RunResult;

/// Blocking left the result unchanged (exact equality).
pub fn max_elements_equal(before: &RunResult, after: &RunResult) -> bool {
    before.max_element == after.max_element
}

/// Max elements within `max_ulps` units in the last place of the element
/// type they were computed in.
///
/// `f32` results are narrowed back before comparing, so the distance is
/// counted in `f32` steps rather than `f64` ones.
pub fn max_elements_within_ulps(
    before: &RunResult,
    after: &RunResult,
    precision: Precision,
    max_ulps: u32,
) -> bool {
    match precision {
        Precision::F32 => ulps_eq!(
            before.max_element as f32,
            after.max_element as f32,
            max_ulps = max_ulps
        ),
        Precision::F64 => ulps_eq!(before.max_element, after.max_element, max_ulps = max_ulps),
    }
}

pub fn before_slower(before: &RunResult, after: &RunResult) -> bool {
    before.duration > after.duration
}

pub fn before_fewer_flops(before: &RunResult, after: &RunResult) -> bool {
    before.throughput < after.throughput
}

pub fn after_faster(before: &RunResult, after: &RunResult) -> bool {
    after.duration < before.duration
}

pub fn after_more_flops(before: &RunResult, after: &RunResult) -> bool {
    after.throughput > before.throughput
}

/// `after.duration / before.duration`; below 1 when blocking helps.
pub fn duration_ratio(before: &RunResult, after: &RunResult) -> f64 {
    after.duration / before.duration
}

/// `after.throughput / before.throughput`; above 1 when blocking helps.
pub fn throughput_ratio(before: &RunResult, after: &RunResult) -> f64 {
    after.throughput / before.throughput
}

/// `sqrt(a * b)`.
pub fn geometric_mean(a: f64, b: f64) -> f64 {
    (a * b).sqrt()
}

use super::BenchResults;
use crate::compare;

/// Max ULP distance accepted by the tolerance-based equality check.
pub const MAX_ULPS: u32 = 4;

/// Whether a check guards the numerical result or the measured speedup.
///
/// Performance checks depend on the machine's cache hierarchy and may be
/// waived; correctness checks never are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Correctness,
    Performance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    Fail { detail: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    fn from_bool(passed: bool, detail: impl FnOnce() -> String) -> Self {
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail { detail: detail() }
        }
    }
}

/// A named verdict over a finished comparison.
pub trait Check {
    fn name(&self) -> &str;

    fn kind(&self) -> CheckKind;

    fn evaluate(&self, results: &BenchResults) -> Outcome;
}

/// A [`Check`] backed by a plain function.
pub struct Expectation {
    name: &'static str,
    kind: CheckKind,
    eval: fn(&BenchResults) -> Outcome,
}

impl Expectation {
    pub const fn new(
        name: &'static str,
        kind: CheckKind,
        eval: fn(&BenchResults) -> Outcome,
    ) -> Self {
        Self { name, kind, eval }
    }
}

impl Check for Expectation {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> CheckKind {
        self.kind
    }

    fn evaluate(&self, results: &BenchResults) -> Outcome {
        (self.eval)(results)
    }
}

fn max_elements_exactly_equal(r: &BenchResults) -> Outcome {
    Outcome::from_bool(compare::max_elements_equal(&r.before, &r.after), || {
        format!(
            "max elements differ: before = {}, after = {}",
            r.before.max_element, r.after.max_element
        )
    })
}

fn max_elements_nearly_equal(r: &BenchResults) -> Outcome {
    let within = compare::max_elements_within_ulps(&r.before, &r.after, r.precision, MAX_ULPS);
    Outcome::from_bool(within, || {
        format!(
            "max elements differ by more than {} {:?} ULPs: before = {}, after = {}",
            MAX_ULPS, r.precision, r.before.max_element, r.after.max_element
        )
    })
}

fn before_has_longer_duration(r: &BenchResults) -> Outcome {
    Outcome::from_bool(compare::before_slower(&r.before, &r.after), || {
        format!(
            "before ran in {:e} s, after in {:e} s",
            r.before.duration, r.after.duration
        )
    })
}

fn before_has_fewer_flops(r: &BenchResults) -> Outcome {
    Outcome::from_bool(compare::before_fewer_flops(&r.before, &r.after), || {
        format!(
            "before reached {:e} FLOP/s, after {:e} FLOP/s",
            r.before.throughput, r.after.throughput
        )
    })
}

fn after_has_shorter_duration(r: &BenchResults) -> Outcome {
    Outcome::from_bool(compare::after_faster(&r.before, &r.after), || {
        format!(
            "after ran in {:e} s, before in {:e} s",
            r.after.duration, r.before.duration
        )
    })
}

fn after_has_more_flops(r: &BenchResults) -> Outcome {
    Outcome::from_bool(compare::after_more_flops(&r.before, &r.after), || {
        format!(
            "after reached {:e} FLOP/s, before {:e} FLOP/s",
            r.after.throughput, r.before.throughput
        )
    })
}

fn duration_ratio_below_one(r: &BenchResults) -> Outcome {
    let ratio = compare::duration_ratio(&r.before, &r.after);
    Outcome::from_bool(ratio < 1.0, || {
        format!("expected duration ratio < 1.0, got {ratio}")
    })
}

fn throughput_ratio_above_one(r: &BenchResults) -> Outcome {
    let ratio = compare::throughput_ratio(&r.before, &r.after);
    Outcome::from_bool(ratio > 1.0, || {
        format!("expected throughput ratio > 1.0, got {ratio}")
    })
}

/// The eight checks, in reporting order.
pub fn standard_suite() -> Vec<Box<dyn Check>> {
    use CheckKind::{Correctness, Performance};

    vec![
        Box::new(Expectation::new(
            "max_elements_are_exactly_the_same",
            Correctness,
            max_elements_exactly_equal,
        )),
        Box::new(Expectation::new(
            "max_elements_are_the_same",
            Correctness,
            max_elements_nearly_equal,
        )),
        Box::new(Expectation::new(
            "before_has_longer_duration",
            Performance,
            before_has_longer_duration,
        )),
        Box::new(Expectation::new(
            "before_has_less_flops",
            Performance,
            before_has_fewer_flops,
        )),
        Box::new(Expectation::new(
            "after_has_shorter_duration",
            Performance,
            after_has_shorter_duration,
        )),
        Box::new(Expectation::new(
            "after_has_more_flops",
            Performance,
            after_has_more_flops,
        )),
        Box::new(Expectation::new(
            "duration_ratio_is_less_than_one",
            Performance,
            duration_ratio_below_one,
        )),
        Box::new(Expectation::new(
            "flops_ratio_is_greater_than_one",
            Performance,
            throughput_ratio_above_one,
        )),
    ]
}

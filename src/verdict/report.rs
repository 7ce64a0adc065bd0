use std::fmt;

use tracing::warn;

use super::BenchResults;
use super::check::{Check, CheckKind, Outcome};

/// How failing performance checks count toward the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerfPolicy {
    /// Every failing check fails the run.
    #[default]
    Strict,
    /// Failing performance checks are waived, e.g. on hosts whose cache
    /// holds the whole working set and tiling can't help.
    Advisory,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Passed,
    Failed(String),
    Waived(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub name: String,
    pub kind: CheckKind,
    pub status: Status,
}

/// Outcome of every check in a suite, in evaluation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub checks: Vec<CheckReport>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, Status::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, Status::Failed(_)))
    }

    pub fn waived(&self) -> usize {
        self.count(|s| matches!(s, Status::Waived(_)))
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status: 0 when nothing failed.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }

    fn count(&self, pred: impl Fn(&Status) -> bool) -> usize {
        self.checks.iter().filter(|c| pred(&c.status)).count()
    }
}

/// Evaluates each check exactly once against `results`.
pub fn run_suite(checks: &[Box<dyn Check>], results: &BenchResults, policy: PerfPolicy) -> Report {
    let checks = checks
        .iter()
        .map(|check| {
            let status = match check.evaluate(results) {
                Outcome::Pass => Status::Passed,
                Outcome::Fail { detail } => {
                    if check.kind() == CheckKind::Performance && policy == PerfPolicy::Advisory {
                        warn!(check = check.name(), %detail, "performance check waived");
                        Status::Waived(detail)
                    } else {
                        Status::Failed(detail)
                    }
                }
            };
            CheckReport {
                name: check.name().to_string(),
                kind: check.kind(),
                status,
            }
        })
        .collect();
    Report { checks }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[==========] Running {} checks.", self.checks.len())?;
        for check in &self.checks {
            writeln!(f, "[ RUN      ] {}", check.name)?;
            match &check.status {
                Status::Passed => writeln!(f, "[       OK ] {}", check.name)?,
                Status::Failed(detail) => {
                    writeln!(f, "{detail}")?;
                    writeln!(f, "[  FAILED  ] {}", check.name)?;
                }
                Status::Waived(detail) => {
                    writeln!(f, "{detail}")?;
                    writeln!(f, "[  WAIVED  ] {}", check.name)?;
                }
            }
        }
        writeln!(f, "[==========] {} checks ran.", self.checks.len())?;
        writeln!(f, "[  PASSED  ] {} checks.", self.passed())?;
        if self.waived() > 0 {
            writeln!(f, "[  WAIVED  ] {} checks.", self.waived())?;
        }
        if self.failed() > 0 {
            writeln!(f, "[  FAILED  ] {} checks, listed below:", self.failed())?;
            for check in &self.checks {
                if matches!(check.status, Status::Failed(_)) {
                    writeln!(f, "[  FAILED  ] {}", check.name)?;
                }
            }
        }
        Ok(())
    }
}

#![forbid(unsafe_code)]

//! Collapses an execution result into the terminal pass/fail report

use crate::engine::executor::ExecutionResult;
use crate::rules::Violation;
use crate::types::RuleName;

/// Final outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Every violation, in the order checkers reported them
    pub violations: Vec<Violation>,
    /// Number of checkers that ran
    pub rules_executed: usize,
    /// True when no violation was found
    pub passed: bool,
}

impl ValidationReport {
    /// Per-rule violation counts, in checker-declaration order, omitting rules
    /// with no violations
    pub fn counts_by_rule(&self) -> Vec<(RuleName, usize)> {
        let mut counts: Vec<(RuleName, usize)> = Vec::new();
        for violation in &self.violations {
            match counts.last_mut() {
                Some((rule, count)) if *rule == violation.rule => *count += 1,
                _ => counts.push((violation.rule, 1)),
            }
        }
        counts
    }
}

/// Turns the violation list into a report
#[derive(Debug, Default)]
pub struct ViolationAggregator;

impl ViolationAggregator {
    pub fn new() -> Self {
        ViolationAggregator
    }

    /// Consumes the execution result; the run passes only if it found nothing
    pub fn aggregate(&self, result: ExecutionResult) -> ValidationReport {
        ValidationReport {
            passed: result.violations.is_empty(),
            violations: result.violations,
            rules_executed: result.rules_executed,
        }
    }
}

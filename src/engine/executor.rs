#![forbid(unsafe_code)]

//! Execution engine for running the enabled checkers against a schema
//!
//! Checkers run sequentially, in registry order, each appending to one
//! shared violation list through its own [`ViolationSink`].

use crate::rules::{RuleRegistry, Violation, ViolationSink};
use crate::schema::Schema;

/// Result of running every enabled checker against a schema
#[derive(Debug)]
pub struct ExecutionResult {
    /// All violations, grouped by checker in registry order
    pub violations: Vec<Violation>,
    /// Number of checkers executed
    pub rules_executed: usize,
}

/// Execution engine that runs the checkers selected by a registry
pub struct ExecutionEngine {
    registry: RuleRegistry,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine with the provided rule registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Run every enabled checker against the schema
    ///
    /// Every checker runs to completion; none stops the run early.
    pub fn execute(&self, schema: &Schema) -> ExecutionResult {
        let mut violations = Vec::new();

        for entry in self.registry.iter_rules() {
            tracing::debug!(rule = %entry.name, policy = entry.description, "running checker");
            let before = violations.len();
            let mut sink = ViolationSink::new(entry.name, &mut violations);
            (entry.check)(schema, &mut sink);
            tracing::debug!(
                rule = %entry.name,
                violations = violations.len() - before,
                "checker finished"
            );
        }

        ExecutionResult {
            violations,
            rules_executed: self.registry.len(),
        }
    }
}

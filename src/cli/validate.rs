//! Validate command implementation
//!
//! This module implements `gql-doc-lint validate <schema> <config>`, which:
//! - Loads the schema (file, directory, or glob)
//! - Loads the JSON rule configuration
//! - Runs every enabled checker in declaration order
//! - Prints either a success line or every violation
//! - Returns the matching exit code

use crate::cli::common::{
    EXIT_CONFIG_ERROR, EXIT_SCHEMA_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS,
};
use crate::engine::{ExecutionEngine, ValidationReport, ViolationAggregator};
use crate::error::LintError;
use crate::output::HumanFormatter;
use crate::rules::RuleRegistry;
use std::io::IsTerminal;
use termcolor::{ColorChoice, StandardStream};

/// Run the validate command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no violations)
/// - 1: One or more policy violations
/// - 3: Rule configuration could not be loaded
/// - 4: Schema could not be loaded
pub fn run_validate(schema_path: &str, config_path: &str) -> i32 {
    match validate(schema_path, config_path) {
        Ok(report) => {
            print_report(&report);
            if report.passed {
                EXIT_SUCCESS
            } else {
                EXIT_VIOLATIONS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                LintError::Schema(_) => EXIT_SCHEMA_ERROR,
                LintError::Config(_) => EXIT_CONFIG_ERROR,
            }
        }
    }
}

/// Load both inputs and run the enabled checkers
///
/// The schema is loaded first; a configuration failure still aborts before
/// any checker runs.
pub fn validate(schema_path: &str, config_path: &str) -> Result<ValidationReport, LintError> {
    let schema = super::common::load(schema_path)?;
    let config = super::common::load_config(config_path)?;

    if config.rules.is_empty() {
        tracing::warn!("no rules are enabled, nothing to check");
    }
    let registry = RuleRegistry::build_from_config(&config.rules);

    let engine = ExecutionEngine::new(registry);
    let result = engine.execute(&schema);

    Ok(ViolationAggregator::new().aggregate(result))
}

/// Print a passing report to stdout and a failing one to stderr
fn print_report(report: &ValidationReport) {
    let formatter = HumanFormatter::new();

    let mut stream = if report.passed {
        StandardStream::stdout(color_choice(std::io::stdout().is_terminal()))
    } else {
        StandardStream::stderr(color_choice(std::io::stderr().is_terminal()))
    };

    if let Err(e) = formatter.write(report, &mut stream) {
        tracing::error!(error = %e, "failed to write report");
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

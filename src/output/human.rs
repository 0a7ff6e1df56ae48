#![forbid(unsafe_code)]

//! Human-readable report formatter
//!
//! A failing report prints one line per violation, in the order the checkers
//! reported them, then a summary line:
//!
//! ```text
//! validateTypeType: schema/widget.graphql:3:6 - Type `Widget` is missing a description
//! ```
//!
//! A passing report prints a single success line.

use crate::engine::ValidationReport;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Human-readable formatter for validation reports
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Write the report, coloring the rule names and the summary when `out` supports it
    pub fn write(&self, report: &ValidationReport, out: &mut dyn WriteColor) -> io::Result<()> {
        if report.passed {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "Schema validation passed")?;
            out.reset()?;
            writeln!(out, " ({} rules checked)", report.rules_executed)?;
            return Ok(());
        }

        for violation in &report.violations {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "{}", violation.rule)?;
            out.reset()?;
            match &violation.location {
                Some(location) => writeln!(out, ": {} - {}", location, violation)?,
                None => writeln!(out, ": {}", violation)?,
            }
        }

        writeln!(out)?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "Schema validation failed")?;
        out.reset()?;
        writeln!(
            out,
            ": {} violation(s) from {} rule(s)",
            report.violations.len(),
            report.counts_by_rule().len()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Violation;
    use crate::schema::SourceLocation;
    use crate::types::RuleName;
    use std::path::PathBuf;

    fn render(report: &ValidationReport) -> String {
        let mut buffer = termcolor::NoColor::new(Vec::new());
        HumanFormatter::new().write(report, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_format_passed() {
        let report = ValidationReport {
            violations: vec![],
            rules_executed: 4,
            passed: true,
        };
        assert_eq!(
            render(&report),
            "Schema validation passed (4 rules checked)\n"
        );
    }

    #[test]
    fn test_format_failed() {
        let report = ValidationReport {
            violations: vec![
                Violation {
                    rule: RuleName::ValidateTypeType,
                    type_name: "Widget".to_string(),
                    field_name: None,
                    location: Some(SourceLocation {
                        file: Some(PathBuf::from("schema/widget.graphql")),
                        line: 3,
                        column: 6,
                    }),
                    message: "Type `Widget` is missing a description".to_string(),
                },
                Violation {
                    rule: RuleName::ValidateBasicTypeFields,
                    type_name: "Widget".to_string(),
                    field_name: Some("id".to_string()),
                    location: None,
                    message: "Field `Widget.id` is missing a description".to_string(),
                },
            ],
            rules_executed: 3,
            passed: false,
        };

        let output = render(&report);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "validateTypeType: schema/widget.graphql:3:6 - Type `Widget` is missing a description",
                "validateBasicTypeFields: Field `Widget.id` is missing a description",
                "",
                "Schema validation failed: 2 violation(s) from 2 rule(s)",
            ]
        );
    }

    #[test]
    fn test_write_with_color_contains_escape_codes() {
        let report = ValidationReport {
            violations: vec![],
            rules_executed: 0,
            passed: true,
        };
        let mut buffer = termcolor::Ansi::new(Vec::new());
        HumanFormatter::new().write(&report, &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Schema validation passed"));
    }
}

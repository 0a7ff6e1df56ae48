#![forbid(unsafe_code)]

//! Core checker types: violations and the write-only sink checkers report into

use crate::schema::{FieldDefinition, Schema, SourceLocation, TypeDefinition};
use crate::types::RuleName;
use std::fmt;

/// A single policy breach found by a checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Rule flag whose checker reported this violation
    pub rule: RuleName,

    /// Type the violation is scoped to
    pub type_name: String,

    /// Field the violation is scoped to, if any
    pub field_name: Option<String>,

    /// Where the offending type or field is declared
    pub location: Option<SourceLocation>,

    /// Human-readable message describing the violation
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Append-only handle onto the shared violation list
///
/// Checkers receive one of these instead of the list itself, so they can add
/// violations but never read or remove what other checkers reported. Every
/// violation is stamped with the rule flag the sink was opened for.
pub struct ViolationSink<'a> {
    rule: RuleName,
    violations: &'a mut Vec<Violation>,
}

impl<'a> ViolationSink<'a> {
    pub fn new(rule: RuleName, violations: &'a mut Vec<Violation>) -> Self {
        Self { rule, violations }
    }

    /// Reports a violation on a whole type
    pub fn type_violation(&mut self, ty: &TypeDefinition, message: String) {
        self.violations.push(Violation {
            rule: self.rule,
            type_name: ty.name.clone(),
            field_name: None,
            location: ty.location.clone(),
            message,
        });
    }

    /// Reports a violation on one field of a type
    pub fn field_violation(
        &mut self,
        ty: &TypeDefinition,
        field: &FieldDefinition,
        message: String,
    ) {
        self.violations.push(Violation {
            rule: self.rule,
            type_name: ty.name.clone(),
            field_name: Some(field.name.clone()),
            location: field.location.clone(),
            message,
        });
    }
}

/// A checker scans the schema and reports every violation it finds
pub type Checker = fn(&Schema, &mut ViolationSink<'_>);

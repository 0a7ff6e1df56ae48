#![forbid(unsafe_code)]

//! Rule checkers and the flag-to-checker registry

pub mod documentation;
pub mod ordering;
pub mod registry;
mod rule;

// Re-export core types
pub use registry::{RULES, RuleEntry, RuleRegistry};
pub use rule::{Checker, Violation, ViolationSink};

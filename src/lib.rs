#![forbid(unsafe_code)]

//! gql-doc-lint: documentation and field-ordering policy for GraphQL schemas
//!
//! Loads a GraphQL schema, runs the checkers enabled by a JSON rule
//! configuration, and reports every type or field that is missing a
//! description or declared out of alphabetical order.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod schema;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, LintError, SchemaError};

// Re-export core domain types for convenient access
pub use cli::validate::validate;
pub use types::RuleName;

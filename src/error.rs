//! Error types for gql-doc-lint
//!
//! Loading the rule configuration and loading the schema each have their own
//! error enum. Both are terminal for a run: nothing is checked once either
//! fails. Policy violations are not errors; they are reported through
//! [`crate::engine::ValidationReport`].

use crate::schema::RootOperation;
use std::path::PathBuf;

/// Rule configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] serde_json::Error),

    /// A recognized rule flag holds something other than a boolean
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Schema loading errors
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A schema file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A schema file is not valid SDL
    #[error("Syntax error in {path}: {message}")]
    Syntax { path: PathBuf, message: String },

    /// The schema path is neither a file, a directory, nor a valid glob
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    /// Walking a schema directory failed
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// The schema path matched no files
    #[error("No schema files found for '{0}'")]
    NoSchemaFiles(String),

    /// Two type definitions share a name
    #[error("Type '{name}' is defined more than once")]
    DuplicateType { name: String },

    /// More than one `schema { ... }` block
    #[error("Schema definition is declared more than once")]
    DuplicateSchemaDefinition,

    /// An `extend` targets a type that is never defined
    #[error("Cannot extend undefined type '{name}'")]
    ExtensionOfUnknownType { name: String },

    /// A root operation names a type that does not exist
    #[error("{operation} root type '{name}' is not defined")]
    UnknownRootType {
        operation: RootOperation,
        name: String,
    },

    /// A root operation names a type that is not an object type
    #[error("{operation} root type '{name}' must be an object type")]
    InvalidRootType {
        operation: RootOperation,
        name: String,
    },
}

/// Top-level error type for gql-doc-lint
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

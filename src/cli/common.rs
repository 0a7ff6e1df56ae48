//! Common helpers shared by CLI commands

use crate::config::Config;
use crate::error::{ConfigError, SchemaError};
use crate::schema::{Schema, load_schema};
use std::path::Path;

/// Exit codes
///
/// 2 is left to clap, which uses it for command-line usage errors.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 3;
pub const EXIT_SCHEMA_ERROR: i32 = 4;

/// Load the rule configuration file
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read and
/// `ConfigError::Parse` / `ConfigError::InvalidValue` if it is malformed.
pub(crate) fn load_config(path: &str) -> Result<Config, ConfigError> {
    Config::load(Path::new(path))
}

/// Load the schema from a file, directory, or glob
///
/// # Errors
///
/// Returns `SchemaError` if no file matches, a file cannot be read, or the
/// SDL does not form a valid schema.
pub(crate) fn load(schema_path: &str) -> Result<Schema, SchemaError> {
    load_schema(schema_path)
}

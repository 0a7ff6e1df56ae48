//! CLI argument parsing using clap

use clap::{Parser, Subcommand};

/// gql-doc-lint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "gql-doc-lint")]
#[command(about = "Documentation and field-ordering policy checks for GraphQL schemas")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a schema against the rules enabled in a configuration file
    Validate {
        /// Schema file, directory, or glob pattern (e.g. "schema/**/*.graphql")
        schema: String,

        /// JSON rule configuration file
        config: String,
    },
}

//! gql-doc-lint CLI entry point

use clap::Parser;
use gql_doc_lint::cli::{Cli, Command};
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match cli.command {
        Command::Validate { schema, config } => {
            gql_doc_lint::cli::validate::run_validate(&schema, &config)
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

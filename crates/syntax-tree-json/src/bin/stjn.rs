//! `stjn`: decode a serialized JSON syntax tree and print it (stdout).
//!
//! Usage:
//!   stjn <SOURCE> [SERIALIZED] [--format display|pretty|source|json|summary]
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` for decode details.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use syntax_tree_json::cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()) {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    eprintln!("error: {err}");
                    return ExitCode::from(2);
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "stjn failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

//! `dsakit` - classic graph and string algorithms from the command line
//!
//! Graphs are read from edge list files with 1-based nodes; see [`dsakit::io`].
//!
//! Exit codes: `0` success, `1` algorithmic failure (cycle, negative cycle, node out of range),
//! `2` usage error, `3` unreadable or malformed input.

mod cli;

use std::{io, process::ExitCode, time::Instant};

use clap::Parser;

use cli::{Cli, commands, logging};

fn main() -> ExitCode {
    let start = Instant::now();
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: failed to initialize logging: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::run(&cli, io::stdout().lock());
    tracing::debug!(elapsed = ?start.elapsed(), ok = result.is_ok(), "command finished");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

//! Lesson script runner and CLI support for Primer.
//!
//! This crate provides:
//! - [`Script`] - Ordered, labelled lesson steps
//! - [`RunConfig`] - Command-line configuration
//! - [`run`] - Executes one configured invocation
//! - [`init_logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod script;

use std::io::{self, Write};

pub use config::RunConfig;
pub use script::{Action, Script, Step};

use primer_foundation::{Error, ErrorKind, Result};
use primer_lessons::bindings;
use primer_lessons::print_range;
use tracing_subscriber::EnvFilter;

/// Runs the lesson, then any extras the configuration asks for.
///
/// Help and version requests short-circuit and run nothing else.
///
/// # Errors
///
/// Returns the first step failure, binding mismatch, or write error.
pub fn run(config: &RunConfig, out: &mut dyn Write) -> Result<()> {
    if config.show_help {
        write_help(out)?;
        return Ok(());
    }

    if config.show_version {
        writeln!(out, "primer {}", env!("CARGO_PKG_VERSION"))?;
        return Ok(());
    }

    Script::lesson().run(out)?;

    if config.list_bindings {
        for binding in bindings::declared()? {
            writeln!(out, "{binding}")?;
        }
    }

    if let Some((start, stop)) = config.range {
        tracing::debug!(start, stop, "printing range");
        print_range(start, stop, out)?;
    }

    Ok(())
}

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configuration's default filter.
///
/// # Errors
///
/// Returns an internal error if a global subscriber is already set.
pub fn init_logging(config: &RunConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("logging already initialized: {e}"))))
}

fn write_help(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "\x1b[1mPrimer\x1b[0m - Lesson helpers for filtering, strings, and parsing

\x1b[1mUSAGE:\x1b[0m
    primer [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -v, --verbose           Log each step to stderr
    --bindings              List declared bindings after the lesson
    --range START STOP      Print START..=STOP after the lesson

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG                Overrides the log filter (default: warn)"
    )
}

//! Primer CLI entry point.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use primer_foundation::Result;
use primer_runtime::{RunConfig, init_logging};

fn main() -> ExitCode {
    match run(env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {}\x1b[0m", e.report());
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> Result<()> {
    let config = RunConfig::from_args(args)?;
    init_logging(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    primer_runtime::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

//! Run configuration parsed from command-line arguments.

use primer_foundation::{Error, Result};

/// What a single `primer` invocation should do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
    /// Print every declared binding after the lesson.
    pub list_bindings: bool,
    /// Print this inclusive range after the lesson.
    pub range: Option<(i64, i64)>,
}

impl RunConfig {
    /// Parses arguments, not including the program name.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error for unknown flags, stray
    /// positional arguments, and missing or non-integer `--range` bounds.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-v" | "--verbose" => config.verbose = true,
                "--bindings" => config.list_bindings = true,
                "--range" => {
                    let start = range_bound(args.next(), "START")?;
                    let stop = range_bound(args.next(), "STOP")?;
                    config.range = Some((start, stop));
                }
                flag if flag.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("unknown option: {flag}")));
                }
                other => {
                    return Err(Error::invalid_argument(format!(
                        "unexpected argument: {other}"
                    )));
                }
            }
        }

        Ok(config)
    }

    /// Default log filter when `RUST_LOG` is unset.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

fn range_bound(arg: Option<String>, name: &str) -> Result<i64> {
    let arg = arg.ok_or_else(|| Error::invalid_argument(format!("--range requires {name}")))?;
    arg.parse()
        .map_err(|_| Error::invalid_argument(format!("invalid --range {name} value: {arg}")))
}

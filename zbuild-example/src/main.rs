//! zbuild Example Project
//!
//! Prints a banner and the version, echoes every argument with its 1-based
//! position, and prints the sum of two fixed integers.

#![forbid(unsafe_code)]

mod runner;

use anyhow::{Context, Result};
use clap::Parser;
use runner::DemoRunner;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;
use zbuild_utils::{Calculator, LogConfig, PackageVersion, init_logging};

#[derive(Parser)]
#[command(name = "zbuild-example", about = "zbuild Example Project")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Values to echo; no token is treated as a flag
    #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

/// Tokens to echo: everything after the program name, untouched.
///
/// clap drops a leading `--` as the end-of-options marker, so the echo list
/// is taken from the raw argv rather than from [`Cli::args`].
fn echo_args<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter().skip(1).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let args = echo_args(std::env::args_os());

    // Diagnostics are best-effort; the demo output must not depend on them.
    let log_config = LogConfig::from_env("warn").with_stderr();
    let _logging_guards = match init_logging(&log_config) {
        Ok(guards) => Some(guards),
        Err(e) => {
            eprintln!("zbuild-example: logging disabled: {e}");
            None
        }
    };
    debug!(level = %log_config.level, format = %log_config.format, "logging initialized");
    debug!(parsed = cli.args.len(), echoed = args.len(), "collected arguments");

    let runner = DemoRunner::new(PackageVersion, Calculator);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = runner
        .run(&args, &mut out)
        .context("Failed to write demo output")?;
    out.flush().context("Failed to flush stdout")?;

    debug!(args = summary.args_echoed, sum = summary.sum, "done");
    Ok(())
}

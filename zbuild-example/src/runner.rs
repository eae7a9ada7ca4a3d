//! The demo runner: banner, version, argument echo, fixed sum.

use std::ffi::OsStr;
use std::io::{self, Write};
use tracing::debug;
use zbuild_utils::{Adder, VersionProvider};

/// First line of every run.
pub const BANNER: &str = "zbuild Example Project";

/// Operands passed to the adder.
pub const OPERANDS: (i32, i32) = (10, 20);

/// What a run wrote, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub args_echoed: usize,
    pub sum: i32,
}

/// Prints the demo output using injected version and adder capabilities.
pub struct DemoRunner<V, A> {
    version: V,
    adder: A,
}

impl<V: VersionProvider, A: Adder> DemoRunner<V, A> {
    pub fn new(version: V, adder: A) -> Self {
        Self { version, adder }
    }

    /// Write the full demo output for `args` (program name excluded) to `out`.
    ///
    /// Arguments are written as their raw bytes, so non-UTF-8 input is echoed
    /// unchanged. The only failure is an I/O error from `out`.
    pub fn run<I, S, W>(&self, args: I, out: &mut W) -> io::Result<RunSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
        W: Write,
    {
        debug!("demo runner starting");

        writeln!(out, "{BANNER}")?;
        writeln!(out, "Version: {}", self.version.version())?;

        let mut args_echoed = 0;
        for (idx, arg) in args.into_iter().enumerate() {
            if idx == 0 {
                writeln!(out, "Arguments:")?;
            }
            write!(out, "  [{}]: ", idx + 1)?;
            out.write_all(arg.as_ref().as_encoded_bytes())?;
            out.write_all(b"\n")?;
            args_echoed += 1;
        }

        let (lhs, rhs) = OPERANDS;
        let sum = self.adder.add(lhs, rhs);
        writeln!(out, "{lhs} + {rhs} = {sum}")?;

        debug!(args_echoed, sum, "demo runner finished");
        Ok(RunSummary { args_echoed, sum })
    }
}

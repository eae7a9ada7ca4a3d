//! Shared helpers for the zbuild example project.
//!
//! Holds the two leaf capabilities the demo runner consumes (the version
//! provider and the adder) together with the environment configuration and
//! logging setup used by the binary.

pub mod calc;
pub mod config;
pub mod logging;
pub mod version;

pub use calc::{Adder, Calculator, calculate};
pub use config::{ConfigSource, EnvError, EnvParser, Sourced};
pub use logging::{LogConfig, LogFormat, LoggingError, LoggingGuards, init_logging};
pub use version::{PackageVersion, VersionProvider, get_version};

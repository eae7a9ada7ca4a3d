//! Version identification.

/// Source of the version string printed by the demo runner.
pub trait VersionProvider {
    /// Return the version identifier. Must not have side effects.
    fn version(&self) -> String;
}

impl<F> VersionProvider for F
where
    F: Fn() -> String,
{
    fn version(&self) -> String {
        self()
    }
}

/// Reports the version this crate was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageVersion;

impl VersionProvider for PackageVersion {
    fn version(&self) -> String {
        get_version().to_string()
    }
}

/// Package version of the zbuild utilities, e.g. `0.1.0`.
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

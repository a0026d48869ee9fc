pub mod artifacts;
pub mod report;
pub mod semver;
pub mod toolchain;
pub mod vcs;

pub use report::{BuildContext, Report, gather_report};
pub use toolchain::{JavacCli, Toolchain};
pub use vcs::{GitCli, Vcs};

/// Placeholder emitted whenever a lookup cannot be completed. The report
/// always keeps its full shape; individual fields degrade to this value.
pub const UNKNOWN: &str = "unknown";

use std::process::Command;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VcsError {
    #[error("git command failed: {0}")]
    CommandFailed(String),
    #[error("git produced no usable output")]
    EmptyOutput,
}

/// Source of version-control describe strings.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// Human-readable descriptor: nearest tag plus commit distance, short
    /// hash and dirty marker, or a bare commit hash when no tag is reachable.
    fn describe_loose(&self) -> Result<String, VcsError>;

    /// Nearest reachable `v`-prefixed release tag, ignoring commit distance.
    fn describe_release_tag(&self) -> Result<String, VcsError>;
}

pub struct GitCli;

impl GitCli {
    fn describe(&self, args: &[&str]) -> Result<String, VcsError> {
        log::info!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| VcsError::CommandFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("git {} failed: {}", args.join(" "), stderr.trim());
            return Err(VcsError::CommandFailed(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let descriptor = stdout.trim();
        if descriptor.is_empty() {
            return Err(VcsError::EmptyOutput);
        }
        Ok(descriptor.to_string())
    }
}

impl Vcs for GitCli {
    fn describe_loose(&self) -> Result<String, VcsError> {
        self.describe(&["describe", "--tags", "--abbrev=4", "--dirty", "--always"])
    }

    fn describe_release_tag(&self) -> Result<String, VcsError> {
        self.describe(&["describe", "--tags", "--match=v*", "--abbrev=0"])
    }
}

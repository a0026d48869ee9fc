use std::process::Command;

use thiserror::Error;

use crate::UNKNOWN;

#[derive(Error, Debug, PartialEq)]
pub enum ToolchainError {
    #[error("{0} could not be run: {1}")]
    CommandFailed(String, String),
    #[error("no version banner recognized in output of {0}")]
    BannerNotRecognized(String),
}

/// Version fields reported by the Java compiler.
#[derive(Debug, Clone, PartialEq)]
pub struct JavacVersion {
    pub full: String,
    pub major: String,
    pub minor: String,
}

impl JavacVersion {
    /// Placeholder used whenever the compiler cannot be inspected.
    pub fn unknown() -> Self {
        Self {
            full: UNKNOWN.to_string(),
            major: UNKNOWN.to_string(),
            minor: UNKNOWN.to_string(),
        }
    }
}

/// Source of compiler version information.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain {
    /// Inspects the compiler at `javac` (a path or a bare command name
    /// resolved via PATH) and returns its reported version.
    fn javac_version(&self, javac: &str) -> Result<JavacVersion, ToolchainError>;
}

pub struct JavacCli;

impl Toolchain for JavacCli {
    fn javac_version(&self, javac: &str) -> Result<JavacVersion, ToolchainError> {
        log::info!("Inspecting compiler {}", javac);

        let output = Command::new(javac)
            .arg("-version")
            .output()
            .map_err(|e| ToolchainError::CommandFailed(javac.to_string(), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::error!("{} -version failed: {}", javac, stderr.trim());
            return Err(ToolchainError::CommandFailed(
                javac.to_string(),
                stderr.trim().to_string(),
            ));
        }

        // Older JDKs print the banner on stderr, newer ones on stdout.
        let banner = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        parse_banner(&banner).ok_or_else(|| ToolchainError::BannerNotRecognized(javac.to_string()))
    }
}

/// Finds `javac <major>.<minor>.<patch>` anywhere in the banner text. The
/// version token may carry a trailing suffix (`21.0.8-ea`), which is ignored.
fn parse_banner(banner: &str) -> Option<JavacVersion> {
    let tokens: Vec<&str> = banner.split_whitespace().collect();
    tokens
        .windows(2)
        .find_map(|pair| (pair[0] == "javac").then(|| version_triple(pair[1])).flatten())
}

fn version_triple(token: &str) -> Option<JavacVersion> {
    let mut fields = token.splitn(3, '.');
    let major = fields.next().filter(|field| is_digits(field))?;
    let minor = fields.next().filter(|field| is_digits(field))?;
    let patch = leading_digits(fields.next()?);
    if patch.is_empty() {
        return None;
    }
    Some(JavacVersion {
        full: format!("{}.{}.{}", major, minor, patch),
        major: major.to_string(),
        minor: minor.to_string(),
    })
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

fn leading_digits(field: &str) -> &str {
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    &field[..end]
}

use std::env;
use std::fmt;
use std::path::Path;

use crate::artifacts::{self, LIBRARIES};
use crate::semver::{extract_semantic_version, rc_suffix};
use crate::toolchain::{JavacVersion, Toolchain};
use crate::vcs::Vcs;

/// Variables that mark a continuous-integration environment when set to a
/// non-empty value.
const CI_MARKERS: [&str; 5] = ["CI", "GITHUB_ACTIONS", "GITLAB_CI", "TRAVIS", "CIRCLECI"];

/// Event names of builds started by a schedule or a manual dispatch.
const TRIGGERED_EVENTS: [&str; 2] = ["schedule", "workflow_dispatch"];

/// Classification of the environment the build runs in, read once at start.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    pub ref_name: Option<String>,
    pub is_ci: bool,
    pub is_triggered: bool,
}

impl BuildContext {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same classification against an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_ci = CI_MARKERS
            .iter()
            .any(|marker| lookup(marker).is_some_and(|value| !value.is_empty()));
        let event = lookup("GITHUB_EVENT_NAME").unwrap_or_default();
        let is_triggered = TRIGGERED_EVENTS.contains(&event.as_str());

        Self {
            ref_name: lookup("GITHUB_REF"),
            is_ci,
            is_triggered,
        }
    }
}

/// All values the build system consumes, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub full_version: String,
    pub semantic_version: String,
    pub asset_version: String,
    pub package_version: String,
    pub release_candidate: String,
    pub libraries: Vec<(String, String)>,
    pub javac: JavacVersion,
}

/// Collects every version value. Each lookup degrades independently: a
/// missing tag, compiler or jar leaves its fields empty or `unknown` while
/// the report keeps its full shape.
pub fn gather_report(
    vcs: &dyn Vcs,
    toolchain: &dyn Toolchain,
    javac: &str,
    lib_dir: &Path,
    context: &BuildContext,
) -> Report {
    let full_version = match vcs.describe_loose() {
        Ok(descriptor) => descriptor,
        Err(e) => {
            log::warn!("No describe output, display version left empty: {}", e);
            String::new()
        }
    };

    let semantic_version = match vcs.describe_release_tag() {
        Ok(tag) => match extract_semantic_version(&tag) {
            Some(version) => version.to_string(),
            None => {
                log::warn!("Tag {} is not a plain x.y.z release tag", tag);
                String::new()
            }
        },
        Err(e) => {
            log::warn!("No release tag reachable: {}", e);
            String::new()
        }
    };

    // Scheduled and manually dispatched CI builds overwrite a rolling
    // release, so their assets carry a fixed name instead of the descriptor.
    let asset_version = if context.is_ci && context.is_triggered {
        "latest".to_string()
    } else {
        full_version.clone()
    };

    let release_candidate = rc_suffix(&full_version).to_string();

    let libraries = LIBRARIES
        .iter()
        .map(|name| (variable_name(name), artifacts::library_version(lib_dir, name)))
        .collect();

    let javac = toolchain.javac_version(javac).unwrap_or_else(|e| {
        log::warn!("Compiler inspection failed: {}", e);
        JavacVersion::unknown()
    });

    Report {
        full_version,
        semantic_version: semantic_version.clone(),
        asset_version,
        package_version: semantic_version,
        release_candidate,
        libraries,
        javac,
    }
}

/// `commons-cli` becomes `COMMONS_CLI_VER`.
fn variable_name(library: &str) -> String {
    format!("{}_VER", library.replace('-', "_").to_uppercase())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ECUXPLOT_VER := {}", self.full_version)?;
        writeln!(f, "SEM_VER ?= {}", self.semantic_version)?;
        writeln!(f, "ASSET_VER ?= {}", self.asset_version)?;
        writeln!(f, "JPACKAGE_VER := {}", self.package_version)?;
        writeln!(f, "RC := {}", self.release_candidate)?;
        for (key, version) in &self.libraries {
            writeln!(f, "{} := {}", key, version)?;
        }
        writeln!(f, "JAVAC_VER := {}", self.javac.full)?;
        writeln!(f, "JAVAC_MAJOR_VER := {}", self.javac.major)?;
        writeln!(f, "JAVAC_MINOR_VER := {}", self.javac.minor)
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::UNKNOWN;

/// Bundled libraries whose versions feed the packaging rules. The report
/// emits one line per entry, in this order.
pub const LIBRARIES: [&str; 8] = [
    "jcommon",
    "jfreechart",
    "opencsv",
    "commons-cli",
    "commons-lang3",
    "slf4j-api",
    "logback-classic",
    "logback-core",
];

/// Version of the newest `<name>-*.jar` under `lib_dir`, taken from the
/// trailing dash-separated token of the filename. Any miss resolves to the
/// `unknown` placeholder.
pub fn library_version(lib_dir: &Path, name: &str) -> String {
    let pattern = format!("{}/{}-*.jar", lib_dir.display(), name);

    let jars: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            log::error!("Bad artifact pattern {}: {}", pattern, e);
            return UNKNOWN.to_string();
        }
    };

    // glob yields paths alphabetically and max_by_key keeps the last
    // maximum, so equal timestamps resolve to the lexicographically last jar.
    let newest = jars
        .into_iter()
        .filter_map(|path| modified(&path).map(|time| (time, path)))
        .max_by_key(|(time, _)| *time);

    let Some((_, jar)) = newest else {
        log::warn!("No {} jar under {}", name, lib_dir.display());
        return UNKNOWN.to_string();
    };

    version_token(&jar).unwrap_or_else(|| UNKNOWN.to_string())
}

fn modified(path: &Path) -> Option<SystemTime> {
    match fs::metadata(path).and_then(|meta| meta.modified()) {
        Ok(time) => Some(time),
        Err(e) => {
            log::warn!("Skipping unreadable {}: {}", path.display(), e);
            None
        }
    }
}

fn version_token(jar: &Path) -> Option<String> {
    let stem = jar.file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 2 {
        return None;
    }
    parts.last().map(|part| part.to_string())
}

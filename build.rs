use std::process::Command;

fn main() {
    // A version tool reports its own version the same way it derives
    // everyone else's: from git describe, with the manifest as fallback.
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    let git_version = match output {
        Ok(o) if o.status.success() => String::from_utf8(o.stdout).ok(),
        _ => None,
    };

    let version = match git_version {
        Some(v) => v.trim().to_string(),
        None => std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string()),
    };

    println!("cargo:rustc-env=PROJECT_VERSION={}", version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}

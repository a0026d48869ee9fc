use std::path::Path;

use clap::Parser;

use ecuxplot_version::report::{BuildContext, gather_report};
use ecuxplot_version::toolchain::JavacCli;
use ecuxplot_version::vcs::GitCli;

/// Prints the version variables consumed by the ECUxPlot build as Makefile
/// assignments on standard output.
#[derive(Parser, Debug)]
#[command(version = env!("PROJECT_VERSION"), about)]
struct Cli {
    /// Path to the javac executable; resolved from PATH when omitted
    javac: Option<String>,
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    log::info!("get-version {}", env!("PROJECT_VERSION"));

    let context = BuildContext::from_env();
    if let Some(ref_name) = &context.ref_name {
        log::debug!("Building from ref {}", ref_name);
    }

    let javac = cli.javac.as_deref().unwrap_or("javac");
    let report = gather_report(&GitCli, &JavacCli, javac, Path::new("lib"), &context);

    print!("{}", report);
}

//! evodiff - pairwise structural comparison across version snapshots
//!
//! Takes an ordered list of version snapshots (each with a build
//! directory holding `code.jar` and `tests.jar`), prepares the
//! analysis scopes for every consecutive pair and constructs the
//! per-pair comparison engines.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::Level;

use evodiff_core::{
    init_tracing, DiffOutcome, Differ, FsDifferencerFactory, FsRunTracker, Version,
    GENERATED_FILE_PATTERNS,
};

#[derive(Parser)]
#[command(name = "evodiff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pairwise structural comparison across program version snapshots", long_about = None)]
struct Cli {
    /// Versions in sequence order, oldest first, as NAME=BUILD_DIR specs
    #[arg(value_name = "NAME=BUILD_DIR")]
    versions: Vec<String>,

    /// Directory holding the shared analysis libraries and exclusions file
    #[arg(short, long)]
    config_dir: PathBuf,

    /// Directory where run-completion markers are kept
    #[arg(long, default_value = ".evodiff")]
    state_dir: PathBuf,

    /// Re-run even if a completed run is recorded
    #[arg(short, long)]
    force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

fn parse_version_spec(spec: &str) -> Result<Version> {
    match spec.split_once('=') {
        Some((name, dir)) if !name.is_empty() && !dir.is_empty() => Ok(Version::new(name, dir)),
        _ => bail!("invalid version spec {:?}, expected NAME=BUILD_DIR", spec),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    init_tracing(cli.json, level);

    let versions = cli
        .versions
        .iter()
        .map(|spec| parse_version_spec(spec))
        .collect::<Result<Vec<_>>>()?;

    let build_dirs = versions.iter().map(|v| v.build_dir.clone()).collect();
    let tracker = Arc::new(
        FsRunTracker::new(&cli.state_dir, "diff", build_dirs, GENERATED_FILE_PATTERNS)
            .context("initialize run tracker")?,
    );

    let mut differ = Differ::new(
        versions,
        &cli.config_dir,
        FsDifferencerFactory::new(),
        tracker,
    );

    match differ.run(cli.force).await.context("diff run failed")? {
        DiffOutcome::Skipped => {
            println!("diff already completed; use --force to re-run");
        }
        DiffOutcome::Ran => {
            let (code, tests) = differ.into_registries();
            println!(
                "diffed {} pair(s) ({} code, {} test engines):",
                code.len(),
                code.len(),
                tests.len()
            );
            for (pair, _) in code.iter() {
                println!("  {}", pair);
            }
        }
    }

    Ok(())
}

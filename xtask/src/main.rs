//! # xtask - Workspace automation
//!
//! Build and check commands for the workspace.
//!
//! See [`HELP_TEXT`] for the list of commands.
use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use xshell::{Shell, cmd};

/// Help text printed by `cargo run -p xtask -- help`.
pub const HELP_TEXT: &str = r#"xtask

Usage:
  cargo run -p xtask -- <command>

Commands:
  help            Show this message
  fmt             Run rustfmt
  fmt-check       Check formatting (CI)
  clippy          Run clippy (workspace)
  test            Run tests via nextest (workspace)
  check-fixtures  Load every JSON fixture under <crate>/tests/data and <crate>/data
  ci              Run fmt-check + clippy + check-fixtures + test (CI profile)

Note:
  cargo-nextest is installed on first use
"#;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let cmd = args.next().unwrap_or_else(|| "help".to_string());

    let sh = Shell::new()?;

    match cmd.as_str() {
        "help" | "-h" | "--help" => help(),
        "fmt" => Ok(cmd!(sh, "cargo +nightly fmt --all").run()?),
        "fmt-check" => Ok(cmd!(sh, "cargo +nightly fmt --all -- --check").run()?),
        "clippy" => Ok(cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?),
        "test" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            // nextest does not run doctests
            cmd!(sh, "cargo test --workspace --doc").run()?;
            Ok(())
        }
        "check-fixtures" => check_fixtures(&sh),
        "ci" => {
            ensure_nextest(&sh)?;
            cmd!(sh, "cargo +nightly fmt --all -- --check").run()?;
            cmd!(sh, "cargo +nightly clippy --workspace -- -D warnings").run()?;
            check_fixtures(&sh)?;
            // e2e tests need the workspace binaries
            cmd!(sh, "cargo build --workspace").run()?;
            cmd!(sh, "cargo nextest run --workspace").run()?;
            cmd!(sh, "cargo test --workspace --doc").run()?;
            Ok(())
        }
        other => bail!("Unknown command: {other}\n\nRun: cargo run -p xtask -- help"),
    }
}

fn help() -> Result<()> {
    println!("{}", HELP_TEXT);
    Ok(())
}

/// Loads every ordination results fixture of every workspace crate.
///
/// Fails on the first file that does not parse or contains non-finite values.
fn check_fixtures(sh: &Shell) -> Result<()> {
    let mut checked = 0;
    for crate_dir in workspace_crate_dirs(sh)? {
        for dir in [crate_dir.join("tests").join("data"), crate_dir.join("data")] {
            for path in json_files(&dir)? {
                ordination_testing::load_results(&path)
                    .with_context(|| format!("invalid fixture {}", path.display()))?;
                checked += 1;
            }
        }
    }
    eprintln!("{checked} fixture(s) OK");
    Ok(())
}

/// JSON files directly inside `dir`, sorted; empty if `dir` does not exist.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[derive(Deserialize)]
struct CargoMetadata {
    packages: Vec<Package>,
}

#[derive(Deserialize)]
struct Package {
    manifest_path: PathBuf,
}

/// Directories of all workspace crates.
fn workspace_crate_dirs(sh: &Shell) -> Result<Vec<PathBuf>> {
    let output = cmd!(sh, "cargo metadata --no-deps --format-version 1").read()?;
    let metadata: CargoMetadata =
        serde_json::from_str(&output).context("failed to parse cargo metadata")?;

    Ok(metadata
        .packages
        .into_iter()
        .filter_map(|p| p.manifest_path.parent().map(Path::to_path_buf))
        .collect())
}

/// Installs cargo-nextest if it is missing.
fn ensure_nextest(sh: &Shell) -> Result<()> {
    // quiet: only the exit status matters here
    if cmd!(sh, "cargo nextest --version").quiet().run().is_ok() {
        return Ok(());
    }

    eprintln!("cargo-nextest not found, installing...");
    cmd!(sh, "cargo install cargo-nextest --locked").run()?;
    eprintln!("cargo-nextest installed");
    Ok(())
}

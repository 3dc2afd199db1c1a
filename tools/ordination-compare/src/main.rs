//! CLI tool for comparing two ordination result files.
//!
//! # Usage
//!
//! ```bash
//! # Compare two results, ignoring axis directions
//! ordination_compare --file1 observed.json --file2 expected.json
//!
//! # Compare to 3 decimals, ignoring method names and keeping axis directions
//! ordination_compare --file1 a.json --file2 b.json --decimal 3 --ignore-method-names --no-directionality
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use ordination_testing::{
    CompareOptions, OrdinationResults, Tolerance, compare_ordination_results_with, load_results,
};
use tracing::info;

/// Compare two ordination results stored as JSON.
///
/// Score matrices are compared up to a sign flip per column unless
/// `--no-directionality` is given.
#[derive(Parser, Debug)]
#[command(name = "ordination_compare")]
#[command(version, about)]
struct Args {
    /// First results file.
    #[arg(long)]
    file1: PathBuf,

    /// Second results file.
    #[arg(long)]
    file2: PathBuf,

    /// Decimal places values must agree to.
    #[arg(long, default_value_t = ordination_testing::tolerance::DEFAULT_DECIMAL)]
    decimal: i32,

    /// Do not compare the short and long method names.
    #[arg(long)]
    ignore_method_names: bool,

    /// Compare score matrices as they are, without aligning column signs.
    #[arg(long)]
    no_directionality: bool,
}

impl Args {
    fn options(&self) -> CompareOptions {
        CompareOptions {
            tolerance: Tolerance::with_decimal(self.decimal),
            ignore_method_names: self.ignore_method_names,
            ignore_directionality: !self.no_directionality,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = args.options();
    info!(?options, "comparing");

    let first = read_results(&args.file1)?;
    let second = read_results(&args.file2)?;

    match compare_ordination_results_with(&first, &second, &options) {
        Ok(()) => {
            println!(
                "The ordination results in '{}' and '{}' are equal.",
                args.file1.display(),
                args.file2.display()
            );
            Ok(())
        }
        Err(difference) => {
            eprintln!("Comparing '{}' with '{}':", args.file1.display(), args.file2.display());
            eprintln!("  {difference}");
            bail!(
                "The ordination results in '{}' and '{}' differ",
                args.file1.display(),
                args.file2.display()
            );
        }
    }
}

/// Loads one results file.
fn read_results(path: &Path) -> Result<OrdinationResults> {
    load_results(path)
        .with_context(|| format!("Failed to read ordination results from '{}'", path.display()))
}

//! # e2e-tests - End-to-end tests of the CLI tools
//!
//! This crate holds e2e tests for the workspace binaries:
//! - `ordination_compare` — compares two ordination result files
//!
//! ## Fixtures
//!
//! The tests share the fixtures of `ordination-testing`, found in
//! `crates/ordination-testing/tests/data/`:
//! - `pcoa_expected.json` — reference PCoA results
//! - `pcoa_flipped.json` — the same results with axes 2 and 3 reversed
//! - `pcoa_perturbed.json` — one site score changed in the 4th decimal

use std::path::{Path, PathBuf};

/// Test directory of `ordination-testing`, whose `data/` holds the fixtures.
fn fixtures_module_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../crates/ordination-testing/tests")
}

/// Path of a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    ordination_testing::get_data_path(fixtures_module_dir(), name)
}

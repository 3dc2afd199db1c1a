//! E2E tests for the `ordination_compare` CLI.
//!
//! Covers:
//! - identical and sign-flipped results
//! - results that differ in values or method names
//! - option flags and unreadable input

use assert_cmd::Command;
use e2e_tests::fixture;
use ndarray::array;
use ordination_testing::{OrdinationResults, load_results, save_results};
use predicates::prelude::*;
use tempfile::tempdir;

/// Create a command running ordination_compare.
///
/// `cargo_bin` is deprecated because of an edge case with custom build
/// directories, but it is the only way to reach a binary of another crate.
#[expect(deprecated)]
fn comparer() -> Command {
    Command::cargo_bin("ordination_compare").unwrap()
}

/// Create a command comparing two fixtures.
fn compare(file1: &str, file2: &str) -> Command {
    let mut cmd = comparer();
    cmd.args([
        "--file1",
        fixture(file1).to_str().unwrap(),
        "--file2",
        fixture(file2).to_str().unwrap(),
    ]);
    cmd
}

#[test]
fn test_fixtures_come_from_library_crate() {
    for name in ["pcoa_expected.json", "pcoa_flipped.json", "pcoa_perturbed.json"] {
        let path = fixture(name);
        assert!(path.is_file(), "missing fixture {}", path.display());
        assert!(path.to_string_lossy().contains("ordination-testing"), "{}", path.display());
        load_results(&path).unwrap();
    }
}

// ============================================================================
// Equal results
// ============================================================================

#[test]
fn test_compare_identical() {
    compare("pcoa_expected.json", "pcoa_expected.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("are equal"));
}

#[test]
fn test_compare_flipped_axes() {
    compare("pcoa_flipped.json", "pcoa_expected.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("are equal"));
}

#[test]
fn test_compare_results_built_in_memory() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let first = OrdinationResults::new(
        "PCA",
        "Principal Component Analysis",
        array![3.0, 1.0],
        array![[1.0, 2.0], [3.0, -1.0]],
    );
    let mut second = first.clone();
    second.site = array![[-1.0, 2.0], [-3.0, -1.0]];
    save_results(&a, &first).unwrap();
    save_results(&b, &second).unwrap();

    comparer()
        .args(["--file1", a.to_str().unwrap(), "--file2", b.to_str().unwrap()])
        .assert()
        .success();
}

// ============================================================================
// Differing results
// ============================================================================

#[test]
fn test_compare_flipped_axes_keeping_directionality() {
    compare("pcoa_flipped.json", "pcoa_expected.json")
        .arg("--no-directionality")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site"))
        .stderr(predicate::str::contains("differ"));
}

#[test]
fn test_compare_perturbed_value() {
    compare("pcoa_perturbed.json", "pcoa_expected.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site[1, 1]"));
}

#[test]
fn test_compare_perturbed_value_coarse_decimal() {
    compare("pcoa_perturbed.json", "pcoa_expected.json")
        .args(["--decimal", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("are equal"));
}

#[test]
fn test_compare_method_names() {
    let dir = tempdir().unwrap();
    let renamed = dir.path().join("renamed.json");
    let mut results = load_results(fixture("pcoa_expected.json")).unwrap();
    results.short_method_name = "MDS".to_string();
    save_results(&renamed, &results).unwrap();

    comparer()
        .args([
            "--file1",
            renamed.to_str().unwrap(),
            "--file2",
            fixture("pcoa_expected.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("short_method_name"));

    comparer()
        .args([
            "--file1",
            renamed.to_str().unwrap(),
            "--file2",
            fixture("pcoa_expected.json").to_str().unwrap(),
            "--ignore-method-names",
        ])
        .assert()
        .success();
}

#[test]
fn test_compare_optional_field_on_one_side() {
    let dir = tempdir().unwrap();
    let with_samples = dir.path().join("with_samples.json");
    let results = load_results(fixture("pcoa_expected.json"))
        .unwrap()
        .with_samples(array![[0.1, 0.2], [0.3, 0.4]])
        .unwrap();
    save_results(&with_samples, &results).unwrap();

    comparer()
        .args([
            "--file1",
            fixture("pcoa_expected.json").to_str().unwrap(),
            "--file2",
            with_samples.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("samples is present in only one result"));
}

// ============================================================================
// Input errors
// ============================================================================

#[test]
fn test_compare_missing_file() {
    comparer()
        .args([
            "--file1",
            "/nonexistent/results.json",
            "--file2",
            fixture("pcoa_expected.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read ordination results"));
}

#[test]
fn test_compare_invalid_json() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "not json").unwrap();

    comparer()
        .args([
            "--file1",
            broken.to_str().unwrap(),
            "--file2",
            fixture("pcoa_expected.json").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_compare_requires_both_files() {
    comparer()
        .args(["--file1", fixture("pcoa_expected.json").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--file2"));
}

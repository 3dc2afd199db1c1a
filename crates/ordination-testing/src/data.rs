//! Fixture lookup and JSON persistence of ordination results.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::IoError, results::OrdinationResults};

/// Name of the fixture directory next to a test module.
pub const DATA_DIR: &str = "data";

/// Path of a fixture file in the `data` directory under `module_dir`.
///
/// ```
/// use std::path::Path;
///
/// use ordination_testing::get_data_path;
///
/// let path = get_data_path("tests", "parrot");
/// assert_eq!(path, Path::new("tests").join("data").join("parrot"));
/// ```
pub fn get_data_path(module_dir: impl AsRef<Path>, filename: &str) -> PathBuf {
    module_dir.as_ref().join(DATA_DIR).join(filename)
}

/// Path of a fixture in the calling crate's `tests/data` directory.
///
/// Expands in the caller, so `CARGO_MANIFEST_DIR` refers to the crate whose
/// tests use the macro.
#[macro_export]
macro_rules! data_path {
    ($filename:expr) => {
        $crate::get_data_path(
            ::std::path::Path::new(::core::env!("CARGO_MANIFEST_DIR")).join("tests"),
            $filename,
        )
    };
}

/// Reads results from a JSON file and validates them.
pub fn load_results(path: impl AsRef<Path>) -> Result<OrdinationResults, IoError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading ordination results");
    let reader = BufReader::new(File::open(path)?);
    let results: OrdinationResults = serde_json::from_reader(reader)?;
    results.validate()?;
    Ok(results)
}

/// Writes results to a JSON file.
pub fn save_results(path: impl AsRef<Path>, results: &OrdinationResults) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.flush()?;
    Ok(())
}

//! Temporary output files for editor sessions
//!
//! When an editor is requested without `--out`, the pipeline is written to a
//! uniquely named file in the system temp directory. The file is kept after
//! the run so the editor can keep it open.

use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Base name used when the root directory has no usable name.
pub const DEFAULT_BASE_NAME: &str = "lighthouse-pipeline";

/// Base name derived from the last segment of the absolute `root`
#[must_use]
pub fn temp_file_base_name(root: &Path) -> String {
    let name = std::path::absolute(root)
        .ok()
        .and_then(|abs| abs.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default();

    if name.chars().count() <= 1 {
        DEFAULT_BASE_NAME.to_string()
    } else {
        name
    }
}

/// File name prefix for a pipeline: `<base>-<qualified name>-`
#[must_use]
pub fn temp_file_prefix(root: &Path, qualified_name: &str) -> String {
    format!(
        "{}-{}-",
        temp_file_base_name(root),
        qualified_name.replace(['/', MAIN_SEPARATOR], "-")
    )
}

/// Creates an empty, persistent `.yaml` file for `qualified_name`
///
/// # Errors
///
/// Returns the IO error if the file cannot be created.
pub fn create_temp_output(root: &Path, qualified_name: &str) -> io::Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix(&temp_file_prefix(root, qualified_name))
        .suffix(".yaml")
        .tempfile()?;
    let (_, path) = file.keep().map_err(|err| err.error)?;
    Ok(path)
}

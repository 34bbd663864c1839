//! Pipeline resolution seam
//!
//! Expanding `uses:` references and merging step libraries is done by an
//! external resolver. This module defines the narrow interface the loader
//! talks to, plus a file based implementation that loads a pipeline source
//! as-is.

use super::{PipelineDocument, ResolveError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Turns a pipeline source path into a fully expanded pipeline document
pub trait PipelineResolver {
    /// Resolves the pipeline stored at `path`
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the pipeline cannot be loaded or expanded.
    fn resolve(&self, path: &Path) -> Result<PipelineDocument, ResolveError>;
}

impl<R: PipelineResolver + ?Sized> PipelineResolver for &R {
    fn resolve(&self, path: &Path) -> Result<PipelineDocument, ResolveError> {
        (**self).resolve(path)
    }
}

impl<R: PipelineResolver + ?Sized> PipelineResolver for Box<R> {
    fn resolve(&self, path: &Path) -> Result<PipelineDocument, ResolveError> {
        (**self).resolve(path)
    }
}

/// Loads a pipeline source file as a single YAML document
///
/// No include expansion is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileResolver;

impl FileResolver {
    /// Creates a new file resolver
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PipelineResolver for FileResolver {
    fn resolve(&self, path: &Path) -> Result<PipelineDocument, ResolveError> {
        tracing::debug!("resolving pipeline {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ResolveError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ResolveError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|source| ResolveError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if value.is_null() {
            return Err(ResolveError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(PipelineDocument::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_resolver_loads_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pullrequest.yaml");
        fs::write(&path, "kind: PipelineRun\nspec:\n  pipelineSpec: {}\n").unwrap();

        let doc = FileResolver::new().resolve(&path).unwrap();
        assert_eq!(doc.as_value()["kind"], serde_yaml::Value::from("PipelineRun"));
    }

    #[test]
    fn test_file_resolver_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let err = FileResolver::new().resolve(&path).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("no pipeline found for {}", path.display())
        );
    }

    #[test]
    fn test_file_resolver_unreadable_path() {
        let temp_dir = TempDir::new().unwrap();

        let err = FileResolver::new().resolve(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ResolveError::Read { .. }));
    }

    #[test]
    fn test_file_resolver_rejects_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yaml");
        fs::write(&path, "kind: [unterminated\n").unwrap();

        let err = FileResolver::new().resolve(&path).unwrap_err();
        assert!(matches!(err, ResolveError::Parse { .. }));
    }

    #[test]
    fn test_file_resolver_rejects_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.yaml");
        fs::write(&path, "").unwrap();

        let err = FileResolver::new().resolve(&path).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Empty { .. } | ResolveError::Parse { .. }
        ));
    }
}

//! Error types for trigger discovery and pipeline resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by a [`PipelineResolver`](super::PipelineResolver)
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The pipeline source file could not be read
    #[error("failed to read pipeline file {}", path.display())]
    Read {
        /// Path of the pipeline source file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The pipeline source file is not valid YAML
    #[error("failed to parse pipeline file {}", path.display())]
    Parse {
        /// Path of the pipeline source file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The pipeline source file contains no document
    #[error("pipeline file {} is empty", path.display())]
    Empty {
        /// Path of the pipeline source file.
        path: PathBuf,
    },

    /// No pipeline source exists at the given path
    #[error("no pipeline found for {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
}

/// Errors that abort loading the trigger set
#[derive(Error, Debug)]
pub enum LoadError {
    /// A directory could not be listed
    #[error("failed to read dir {}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Checking for a triggers file failed for a reason other than absence
    #[error("failed to check if file exists {}", path.display())]
    Stat {
        /// Path being checked.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A triggers file could not be read
    #[error("failed to load {}", path.display())]
    ReadTriggers {
        /// Path of the triggers file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A triggers file is not a valid trigger configuration
    #[error("failed to load {}", path.display())]
    ParseTriggers {
        /// Path of the triggers file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// One of the trigger's pipelines failed to resolve
    #[error("failed to load pipelines for trigger: {}: failed to load {}", trigger.display(), path.display())]
    LoadPipeline {
        /// Path of the triggers file that referenced the pipeline.
        trigger: PathBuf,
        /// Resolved path of the pipeline source file.
        path: PathBuf,
        /// Resolver failure.
        #[source]
        source: ResolveError,
    },
}

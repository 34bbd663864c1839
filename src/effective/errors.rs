//! Error types for the `effective` command

use crate::executor::CommandError;
use crate::infrastructure::InputError;
use crate::pipeline::LoadError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end an `effective` run
#[derive(Error, Debug)]
pub enum EffectiveError {
    /// Trigger discovery failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A flag named a value that does not exist
    #[error("invalid option: --{option} {value} available names {}", available.join(", "))]
    InvalidOption {
        /// Flag name without dashes.
        option: &'static str,
        /// Value that was given.
        value: String,
        /// Valid values.
        available: Vec<String>,
    },

    /// The user cancelled a pick-list
    #[error("no {what} selected")]
    NothingSelected {
        /// What was being picked.
        what: &'static str,
    },

    /// The pick-list could not be shown
    #[error("failed to pick {what}")]
    Pick {
        /// What was being picked.
        what: &'static str,
        /// Input failure.
        #[source]
        source: InputError,
    },

    /// The temporary output file could not be created
    #[error("failed to create temp file")]
    CreateTempFile(#[source] std::io::Error),

    /// The pipeline could not be serialized
    #[error("failed to marshal pipeline for {name}")]
    Serialize {
        /// Qualified pipeline name.
        name: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The pipeline could not be written to a file
    #[error("failed to save file {}", path.display())]
    SaveFile {
        /// Output file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The pipeline could not be written to the terminal
    #[error("failed to write pipeline {name}")]
    Write {
        /// Qualified pipeline name.
        name: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The saved file could not be scanned for the editor line
    #[error("failed to load pipeline file {}", path.display())]
    ReadSaved {
        /// Saved output file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The editor setting is not a valid command line
    #[error("invalid editor command '{editor}'")]
    InvalidEditor {
        /// Editor setting as given.
        editor: String,
        /// Parse failure, if any.
        #[source]
        source: Option<shell_words::ParseError>,
    },

    /// The editor failed to start or exited with an error
    #[error("failed to open editor via command: {command}")]
    Editor {
        /// Command line that was run.
        command: String,
        /// Runner failure.
        #[source]
        source: CommandError,
    },
}

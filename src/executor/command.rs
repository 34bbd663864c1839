//! External process execution
//!
//! Editors are launched in the foreground and share the terminal with this
//! process, so standard streams are inherited rather than captured.

use std::fmt;
use std::process::{ExitStatus, Stdio};
use thiserror::Error;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Program to run.
    pub name: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl Command {
    /// Creates a command
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Shell-quoted command line, for messages
    #[must_use]
    pub fn cli(&self) -> String {
        shell_words::join(std::iter::once(&self.name).chain(&self.args))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cli())
    }
}

/// Errors from running an external command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started
    #[error("failed to start {name}")]
    Spawn {
        /// Program name.
        name: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The program exited unsuccessfully
    #[error("{name} exited with {status}")]
    Exit {
        /// Program name.
        name: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}

/// Runs commands to completion
pub trait CommandRunner {
    /// Runs `command` and waits for it to exit
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] if the command cannot start or fails.
    fn run(&self, command: &Command) -> Result<(), CommandError>;
}

/// Runs commands as child processes with inherited standard streams
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &Command) -> Result<(), CommandError> {
        tracing::debug!("Running: {}", command);

        let status = std::process::Command::new(&command.name)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| CommandError::Spawn {
                name: command.name.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CommandError::Exit {
                name: command.name.clone(),
                status,
            });
        }
        Ok(())
    }
}

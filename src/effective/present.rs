//! Rendering the selected pipeline
//!
//! The pipeline is printed to stdout, saved to a file, or saved and opened in
//! an editor. An editor without `--out` gets a temporary file.

use super::editor::{FALLBACK_LINE, editor_command, first_step_line};
use super::EffectiveError;
use crate::executor::{Command, CommandRunner, create_temp_output};
use crate::infrastructure::EffectiveOptions;
use crate::pipeline::{PipelineDocument, Trigger};
use console::style;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// What the presenter did with the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Written to the output stream
    Printed,
    /// Saved to a file
    Saved {
        /// File written.
        path: PathBuf,
    },
    /// Saved to a file and opened in an editor
    Opened {
        /// File written.
        path: PathBuf,
        /// Editor command that was run.
        command: Command,
    },
}

/// Renders a resolved pipeline according to the run's options
pub struct Presenter<'a> {
    options: &'a EffectiveOptions,
    runner: &'a dyn CommandRunner,
}

impl<'a> Presenter<'a> {
    /// Creates a presenter
    #[must_use]
    pub fn new(options: &'a EffectiveOptions, runner: &'a dyn CommandRunner) -> Self {
        Self { options, runner }
    }

    /// Displays `pipeline`, the job `name` of `trigger`
    ///
    /// # Errors
    ///
    /// Returns an [`EffectiveError`] if the pipeline cannot be written or the
    /// editor fails.
    pub fn display(
        &self,
        trigger: &Trigger,
        name: &str,
        pipeline: &PipelineDocument,
        out: &mut dyn Write,
    ) -> Result<Presentation, EffectiveError> {
        let mut out_file = self.options.out_file.clone();
        if self.options.editor.is_some() && out_file.is_none() {
            let path = create_temp_output(&self.options.dir, name)
                .map_err(EffectiveError::CreateTempFile)?;
            out_file = Some(path);
        }

        if let Some(path) = out_file {
            save_pipeline(pipeline, name, &path)?;
            info!("saved file {}", style(path.display()).green());

            if let Some(editor) = &self.options.editor {
                let command = self.open_in_editor(&path, editor)?;
                return Ok(Presentation::Opened { path, command });
            }
            return Ok(Presentation::Saved { path });
        }

        let data = pipeline
            .to_yaml()
            .map_err(|source| EffectiveError::Serialize {
                name: name.to_string(),
                source,
            })?;

        info!(
            "trigger {} pipeline {}",
            style(trigger.key()).green(),
            style(name).green()
        );
        out.write_all(data.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|source| EffectiveError::Write {
                name: name.to_string(),
                source,
            })?;
        Ok(Presentation::Printed)
    }

    fn open_in_editor(&self, path: &Path, editor: &str) -> Result<Command, EffectiveError> {
        let line = match self.options.line {
            Some(line) => line,
            None => find_first_step_line(path)?.unwrap_or_else(|| {
                info!("could not find line with 'steps:'");
                FALLBACK_LINE
            }),
        };

        let command = editor_command(editor, path, line)?;
        self.runner
            .run(&command)
            .map_err(|source| EffectiveError::Editor {
                command: command.cli(),
                source,
            })?;
        Ok(command)
    }
}

/// Serializes `pipeline` as YAML into `path`
///
/// # Errors
///
/// Returns an [`EffectiveError`] if serialization or the write fails.
pub fn save_pipeline(
    pipeline: &PipelineDocument,
    name: &str,
    path: &Path,
) -> Result<(), EffectiveError> {
    let data = pipeline
        .to_yaml()
        .map_err(|source| EffectiveError::Serialize {
            name: name.to_string(),
            source,
        })?;
    fs::write(path, data).map_err(|source| EffectiveError::SaveFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Scans a saved pipeline for the editor line
///
/// # Errors
///
/// Returns [`EffectiveError::ReadSaved`] if the file cannot be read.
pub fn find_first_step_line(path: &Path) -> Result<Option<usize>, EffectiveError> {
    let content = fs::read_to_string(path).map_err(|source| EffectiveError::ReadSaved {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(first_step_line(&content))
}

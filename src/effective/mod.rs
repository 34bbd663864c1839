//! The `effective` command
//!
//! Loads every trigger below the root directory, resolves their pipelines,
//! selects one trigger and one pipeline, then prints, saves or opens it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lighthouse_pipeline::effective::EffectiveCommand;
//! use lighthouse_pipeline::{BatchInput, EffectiveOptions, FileResolver, ProcessRunner};
//!
//! let options = EffectiveOptions {
//!     trigger_name: Some(".lighthouse/jx/triggers.yaml".into()),
//!     pipeline_name: Some("presubmit/pr".into()),
//!     ..Default::default()
//! };
//! let command = EffectiveCommand::new(options, &FileResolver, &BatchInput, &ProcessRunner);
//! command.run(&mut std::io::stdout()).unwrap();
//! ```

pub mod editor;
pub mod errors;
pub mod present;
pub mod select;

pub use editor::{EditorKind, FALLBACK_LINE, editor_command, first_step_line};
pub use errors::EffectiveError;
pub use present::{Presentation, Presenter};
pub use select::{PIPELINE_CHOICE, TRIGGER_CHOICE, select_name, select_pipeline, select_trigger};

use crate::executor::CommandRunner;
use crate::infrastructure::{EffectiveOptions, Input};
use crate::pipeline::{PipelineResolver, load_triggers};
use std::io::Write;

/// One invocation of the `effective` command with its collaborators
pub struct EffectiveCommand<'a> {
    options: EffectiveOptions,
    resolver: &'a dyn PipelineResolver,
    input: &'a dyn Input,
    runner: &'a dyn CommandRunner,
}

impl<'a> EffectiveCommand<'a> {
    /// Creates the command
    #[must_use]
    pub fn new(
        options: EffectiveOptions,
        resolver: &'a dyn PipelineResolver,
        input: &'a dyn Input,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            options,
            resolver,
            input,
            runner,
        }
    }

    /// Runs the command, printing to `out` when no file is written
    ///
    /// # Errors
    ///
    /// Returns the first [`EffectiveError`]; nothing is retried.
    pub fn run(&self, out: &mut dyn Write) -> Result<Presentation, EffectiveError> {
        let options = &self.options;
        let triggers = load_triggers(self.resolver, &options.dir, options.recursive)?;
        tracing::debug!("found {} trigger files", triggers.len());

        let trigger = select_trigger(
            self.input,
            &triggers,
            &options.dir,
            options.trigger_name.as_deref(),
        )?;
        let (name, pipeline) =
            select_pipeline(self.input, trigger, options.pipeline_name.as_deref())?;

        Presenter::new(options, self.runner).display(trigger, &name, pipeline, out)
    }
}

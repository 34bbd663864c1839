//! Interactive selection

use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use thiserror::Error;

/// Errors raised while asking the user to pick a value
#[derive(Error, Debug)]
pub enum InputError {
    /// Prompting is disabled
    #[error("cannot prompt in batch mode: {message} ({help})")]
    BatchMode {
        /// Prompt that would have been shown.
        message: String,
        /// What the user should pass instead.
        help: String,
    },

    /// The terminal prompt failed
    #[error("prompt failed")]
    Prompt(#[from] dialoguer::Error),
}

/// Picks one name out of a list
pub trait Input {
    /// Asks the user to pick one of `names`
    ///
    /// Returns an empty string when the user cancels.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if no prompt can be shown.
    fn pick_name_with_default(
        &self,
        names: &[String],
        message: &str,
        default: &str,
        help: &str,
    ) -> Result<String, InputError>;
}

/// Pick-list on the controlling terminal
#[derive(Default)]
pub struct TerminalInput {
    theme: ColorfulTheme,
}

impl TerminalInput {
    /// Creates a terminal input with the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Input for TerminalInput {
    fn pick_name_with_default(
        &self,
        names: &[String],
        message: &str,
        default: &str,
        help: &str,
    ) -> Result<String, InputError> {
        if names.is_empty() {
            return Ok(String::new());
        }
        tracing::debug!("{}", help);

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(message.trim_end_matches([':', ' ']))
            .items(names);
        if let Some(index) = names.iter().position(|name| name == default) {
            select = select.default(index);
        }

        let picked = select.interact_opt()?;
        Ok(picked.map(|index| names[index].clone()).unwrap_or_default())
    }
}

/// Input used with `--batch-mode`: returns the default or fails
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchInput;

impl Input for BatchInput {
    fn pick_name_with_default(
        &self,
        _names: &[String],
        message: &str,
        default: &str,
        help: &str,
    ) -> Result<String, InputError> {
        if !default.is_empty() {
            return Ok(default.to_string());
        }
        Err(InputError::BatchMode {
            message: message.trim_end_matches([':', ' ']).to_string(),
            help: help.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_input_returns_default() {
        let names = vec!["presubmit/pr".to_string()];
        let picked = BatchInput
            .pick_name_with_default(&names, "pick the pipeline: ", "presubmit/pr", "")
            .unwrap();
        assert_eq!(picked, "presubmit/pr");
    }

    #[test]
    fn test_batch_input_refuses_to_prompt() {
        let names = vec!["presubmit/pr".to_string()];
        let err = BatchInput
            .pick_name_with_default(&names, "pick the pipeline: ", "", "use --pipeline")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot prompt in batch mode: pick the pipeline (use --pipeline)"
        );
    }

    #[test]
    fn test_terminal_input_empty_list_cancels() {
        let picked = TerminalInput::new()
            .pick_name_with_default(&[], "pick the trigger config: ", "", "")
            .unwrap();
        assert!(picked.is_empty());
    }
}

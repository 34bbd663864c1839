//! Trigger and pipeline selection
//!
//! Both selections follow the same rule: use the flag value when given,
//! otherwise prompt with a pick-list. Unknown values list the alternatives.

use super::EffectiveError;
use crate::infrastructure::Input;
use crate::pipeline::{PipelineDocument, Trigger, clean_path};
use std::path::Path;

/// What is being selected and how to ask for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Flag that supplies the value.
    pub option: &'static str,
    /// Noun used in "no ... selected".
    pub noun: &'static str,
    /// Pick-list prompt.
    pub prompt: &'static str,
    /// Pick-list help.
    pub help: &'static str,
}

/// Selection of a triggers file.
pub const TRIGGER_CHOICE: Choice = Choice {
    option: "trigger",
    noun: "trigger file",
    prompt: "pick the trigger config: ",
    help: "select the set of triggers to process",
};

/// Selection of a pipeline within a trigger.
pub const PIPELINE_CHOICE: Choice = Choice {
    option: "pipeline",
    noun: "pipeline",
    prompt: "pick the pipeline: ",
    help: "select the pipeline to view",
};

/// Resolves `explicit` against `candidates`, prompting when it is unset
///
/// # Errors
///
/// - [`EffectiveError::InvalidOption`] if the value is not a candidate
/// - [`EffectiveError::NothingSelected`] if the prompt was cancelled
/// - [`EffectiveError::Pick`] if the prompt could not be shown
pub fn select_name(
    input: &dyn Input,
    choice: &Choice,
    explicit: Option<&str>,
    candidates: &[String],
) -> Result<String, EffectiveError> {
    let name = match explicit {
        Some(name) => name.to_string(),
        None => {
            let picked = input
                .pick_name_with_default(candidates, choice.prompt, "", choice.help)
                .map_err(|source| EffectiveError::Pick {
                    what: choice.noun,
                    source,
                })?;
            if picked.is_empty() {
                return Err(EffectiveError::NothingSelected { what: choice.noun });
            }
            picked
        }
    };

    if !candidates.contains(&name) {
        return Err(EffectiveError::InvalidOption {
            option: choice.option,
            value: name,
            available: candidates.to_vec(),
        });
    }
    Ok(name)
}

/// Picks the trigger to display
///
/// A `--trigger` value relative to `root` also matches.
///
/// # Errors
///
/// See [`select_name`].
pub fn select_trigger<'t>(
    input: &dyn Input,
    triggers: &'t [Trigger],
    root: &Path,
    explicit: Option<&str>,
) -> Result<&'t Trigger, EffectiveError> {
    let keys: Vec<String> = triggers.iter().map(Trigger::key).collect();
    let explicit = explicit.map(|name| {
        let joined = clean_path(&root.join(name)).display().to_string();
        if !keys.iter().any(|key| key == name) && keys.contains(&joined) {
            joined
        } else {
            name.to_string()
        }
    });

    let name = select_name(input, &TRIGGER_CHOICE, explicit.as_deref(), &keys)?;
    let index = keys
        .iter()
        .position(|key| *key == name)
        .unwrap_or_default();
    Ok(&triggers[index])
}

/// Picks the pipeline to display from `trigger`
///
/// # Errors
///
/// See [`select_name`].
pub fn select_pipeline<'t>(
    input: &dyn Input,
    trigger: &'t Trigger,
    explicit: Option<&str>,
) -> Result<(String, &'t PipelineDocument), EffectiveError> {
    let name = select_name(input, &PIPELINE_CHOICE, explicit, &trigger.names)?;
    match trigger.pipeline(&name) {
        Some(pipeline) => Ok((name, pipeline)),
        None => Err(EffectiveError::InvalidOption {
            option: PIPELINE_CHOICE.option,
            value: name,
            available: trigger.names.clone(),
        }),
    }
}

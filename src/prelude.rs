//! Prelude module for common imports

pub use crate::effective::{EffectiveCommand, EffectiveError, Presentation};
pub use crate::executor::{Command, CommandRunner, ProcessRunner};
pub use crate::infrastructure::{BatchInput, EffectiveOptions, Input, TerminalInput};
pub use crate::pipeline::{
    FileResolver, PipelineDocument, PipelineResolver, Trigger, TriggerConfig, load_triggers,
};

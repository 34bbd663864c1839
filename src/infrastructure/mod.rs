//! Infrastructure layer
//!
//! Configuration, logging and terminal interaction.

mod config;
mod input;
mod logging;

pub use config::{DEFAULT_LOG_LEVEL, EDITOR_ENV, EffectiveOptions, non_empty};
pub use input::{BatchInput, Input, InputError, TerminalInput};
pub use logging::init_logging;

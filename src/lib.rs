//! # Lighthouse Pipeline - effective pipeline viewer
//!
//! Finds the lighthouse trigger configurations of a repository, resolves the
//! pipelines their jobs reference and shows one of them in its effective,
//! fully expanded form: printed, saved to a file or opened in an editor.
//!
//! ## Layout
//!
//! - [`pipeline`]: trigger config schema, the resolver seam and discovery
//! - [`effective`]: selection and presentation of one pipeline
//! - [`executor`]: editor processes and temporary output files
//! - [`infrastructure`]: options, logging and interactive input
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod effective;
pub mod executor;
pub mod infrastructure;
pub mod pipeline;

// Prelude module for common imports
pub mod prelude;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use effective::{EffectiveCommand, EffectiveError, Presentation};
pub use executor::{Command, CommandError, CommandRunner, ProcessRunner};
pub use infrastructure::{
    BatchInput, EDITOR_ENV, EffectiveOptions, Input, InputError, TerminalInput, init_logging,
};
pub use pipeline::{
    FileResolver, JobKind, JobSpec, LoadError, PipelineDocument, PipelineResolver, ResolveError,
    Trigger, TriggerConfig, TriggerLoader, load_triggers,
};

/// Version of the lighthouse-pipeline crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

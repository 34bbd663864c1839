//! Trigger and pipeline domain types and discovery

pub mod document;
pub mod errors;
pub mod loader;
pub mod resolver;
pub mod trigger;


pub use document::PipelineDocument;
pub use errors::{LoadError, ResolveError};
pub use loader::{TriggerLoader, clean_path, load_triggers};
pub use resolver::{FileResolver, PipelineResolver};
pub use trigger::{
    JobKind, JobSpec, LIGHTHOUSE_DIR, TEKTON_PIPELINE_AGENT, TRIGGERS_FILE, Trigger,
    TriggerConfig, TriggerSpec,
};

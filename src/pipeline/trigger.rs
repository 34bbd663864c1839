//! Trigger configuration types
//!
//! Only the parts of the lighthouse `TriggerConfig` schema this tool reads are
//! typed; every other key of a job is kept in [`JobSpec::extra`] so nothing is
//! dropped when a config is re-serialized.

use super::PipelineDocument;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

/// Directory name holding trigger folders.
pub const LIGHTHOUSE_DIR: &str = ".lighthouse";

/// File name of a trigger configuration inside a trigger folder.
pub const TRIGGERS_FILE: &str = "triggers.yaml";

/// Agent assigned to jobs that carry an inline pipeline spec but no agent.
pub const TEKTON_PIPELINE_AGENT: &str = "tekton-pipeline";

/// Parsed contents of a `triggers.yaml` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerConfig {
    /// Schema version, e.g. `config.lighthouse.jenkins-x.io/v1alpha1`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    /// Resource kind, usually `TriggerConfig`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Job definitions.
    #[serde(default)]
    pub spec: TriggerSpec,
}

/// Job lists of a trigger configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerSpec {
    /// Jobs run before a change is merged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presubmits: Vec<JobSpec>,
    /// Jobs run after a change is merged.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub postsubmits: Vec<JobSpec>,
}

/// A single presubmit or postsubmit job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSpec {
    /// Job name, unique within its list.
    pub name: String,
    /// Pipeline source file relative to the triggers file directory.
    #[serde(
        default,
        rename = "source",
        alias = "source_path",
        alias = "sourcePath",
        alias = "source-path",
        skip_serializing_if = "String::is_empty"
    )]
    pub source_path: String,
    /// Agent that runs the job.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub agent: String,
    /// Inline pipeline spec.
    #[serde(
        default,
        rename = "pipeline_run_spec",
        alias = "pipelineRunSpec",
        skip_serializing_if = "Option::is_none"
    )]
    pub pipeline_run_spec: Option<serde_yaml::Value>,
    /// Remaining job keys, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl JobSpec {
    /// Returns true if this job references an external pipeline file
    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.source_path.is_empty()
    }

    /// Assigns the tekton agent to jobs with an inline spec and no agent.
    pub fn apply_default_agent(&mut self) {
        if self.agent.is_empty() && self.pipeline_run_spec.is_some() {
            self.agent = TEKTON_PIPELINE_AGENT.to_string();
        }
    }
}

/// Job category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Runs before merge.
    Presubmit,
    /// Runs after merge.
    Postsubmit,
}

impl JobKind {
    /// Prefix used in qualified job names
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Presubmit => "presubmit",
            Self::Postsubmit => "postsubmit",
        }
    }

    /// Builds the `<kind>/<name>` identifier for a job
    #[must_use]
    pub fn qualify(self, name: &str) -> String {
        format!("{}/{}", self.as_str(), name)
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discovered `triggers.yaml` together with its resolved pipelines
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    /// Path of the triggers file, the trigger's unique key.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: TriggerConfig,
    /// Qualified job names in file order, presubmits first.
    pub names: Vec<String>,
    /// Resolved pipeline per qualified job name.
    pub pipelines: HashMap<String, PipelineDocument>,
}

impl Trigger {
    /// Creates a trigger with no resolved pipelines yet
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, config: TriggerConfig) -> Self {
        Self {
            path: path.into(),
            config,
            names: Vec::new(),
            pipelines: HashMap::new(),
        }
    }

    /// Key used for selection and display
    #[must_use]
    pub fn key(&self) -> String {
        self.path.display().to_string()
    }

    /// Directory containing the triggers file
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Looks up a resolved pipeline by qualified name
    #[must_use]
    pub fn pipeline(&self, name: &str) -> Option<&PipelineDocument> {
        self.pipelines.get(name)
    }

    /// Records a resolved pipeline, keeping `names` in insertion order
    pub fn insert_pipeline(&mut self, name: String, document: PipelineDocument) {
        self.names.push(name.clone());
        self.pipelines.insert(name, document);
    }
}

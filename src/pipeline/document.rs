//! The resolved pipeline document

use serde::{Deserialize, Serialize};

/// A fully expanded pipeline definition
///
/// The content is opaque to this crate: it is produced by a
/// [`PipelineResolver`](super::PipelineResolver) and only ever serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineDocument(serde_yaml::Value);

impl PipelineDocument {
    /// Wraps a YAML value
    #[must_use]
    pub fn new(value: serde_yaml::Value) -> Self {
        Self(value)
    }

    /// Parses a document from YAML text
    ///
    /// # Errors
    ///
    /// Returns the YAML error if `content` is not a valid document.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content).map(Self)
    }

    /// Borrows the underlying value
    #[must_use]
    pub fn as_value(&self) -> &serde_yaml::Value {
        &self.0
    }

    /// Serializes the document as YAML
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the value cannot be serialized.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.0)
    }
}

impl From<serde_yaml::Value> for PipelineDocument {
    fn from(value: serde_yaml::Value) -> Self {
        Self(value)
    }
}

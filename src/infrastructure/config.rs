//! Configuration management

use std::path::PathBuf;

/// Environment variable naming the default editor.
pub const EDITOR_ENV: &str = "JX_EDITOR";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for one `effective` run
///
/// Built once at startup; nothing reads the environment after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    /// Repository root to scan.
    pub dir: PathBuf,
    /// Triggers file path, prompted for when unset.
    pub trigger_name: Option<String>,
    /// Qualified pipeline name, prompted for when unset.
    pub pipeline_name: Option<String>,
    /// File to write the pipeline to instead of stdout.
    pub out_file: Option<PathBuf>,
    /// Editor command used to open the written pipeline.
    pub editor: Option<String>,
    /// Line to open the editor at.
    pub line: Option<usize>,
    /// Scan every nested `.lighthouse` directory.
    pub recursive: bool,
    /// Never prompt.
    pub batch_mode: bool,
}

impl Default for EffectiveOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            trigger_name: None,
            pipeline_name: None,
            out_file: None,
            editor: None,
            line: None,
            recursive: false,
            batch_mode: false,
        }
    }
}

impl EffectiveOptions {
    /// Falls back to `JX_EDITOR` when no editor was given
    #[must_use]
    pub fn with_editor_from_env(self) -> Self {
        let value = std::env::var(EDITOR_ENV).ok();
        self.with_editor_fallback(value)
    }

    /// Falls back to `value` when no editor was given
    #[must_use]
    pub fn with_editor_fallback(mut self, value: Option<String>) -> Self {
        if self.editor.is_none() {
            self.editor = non_empty(value);
        }
        self
    }
}

/// Treats blank flag values as unset
#[must_use]
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = EffectiveOptions::default();
        assert_eq!(options.dir, PathBuf::from("."));
        assert!(options.editor.is_none());
        assert!(!options.recursive);
    }

    #[test]
    fn test_editor_fallback_only_when_unset() {
        let options = EffectiveOptions::default().with_editor_fallback(Some("code".into()));
        assert_eq!(options.editor.as_deref(), Some("code"));

        let options = EffectiveOptions {
            editor: Some("idea".into()),
            ..Default::default()
        }
        .with_editor_fallback(Some("code".into()));
        assert_eq!(options.editor.as_deref(), Some("idea"));

        let options = EffectiveOptions::default().with_editor_fallback(Some("  ".into()));
        assert!(options.editor.is_none());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("pr".into())), Some("pr".into()));
    }
}

//! Editor launch conventions

use super::EffectiveError;
use crate::executor::Command;
use std::path::Path;

/// Line used when the saved pipeline has no `steps:` key.
///
/// Roughly where the steps start after the usual parameters block.
pub const FALLBACK_LINE: usize = 161;

/// Editors with a known "open at line" argument convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    /// IntelliJ IDEA: `--line N path`
    Idea,
    /// Visual Studio Code: `-g path:N`
    VsCode,
    /// Anything else: just the path
    Other,
}

impl EditorKind {
    /// Identifies an editor by its program file name
    #[must_use]
    pub fn from_program(program: &str) -> Self {
        let name = Path::new(program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match name.as_str() {
            "idea" => Self::Idea,
            "code" => Self::VsCode,
            _ => Self::Other,
        }
    }

    /// Arguments that open `path` at `line`
    #[must_use]
    pub fn file_args(self, path: &str, line: usize) -> Vec<String> {
        match self {
            Self::Idea => vec!["--line".to_string(), line.to_string(), path.to_string()],
            Self::VsCode => vec!["-g".to_string(), format!("{path}:{line}")],
            Self::Other => vec![path.to_string()],
        }
    }
}

/// Builds the command opening `path` at `line` with `editor`
///
/// `editor` may carry its own arguments, e.g. `"code --wait"`.
///
/// # Errors
///
/// Returns [`EffectiveError::InvalidEditor`] if `editor` is empty or cannot
/// be split into words.
pub fn editor_command(editor: &str, path: &Path, line: usize) -> Result<Command, EffectiveError> {
    let mut words = shell_words::split(editor).map_err(|source| EffectiveError::InvalidEditor {
        editor: editor.to_string(),
        source: Some(source),
    })?;
    if words.is_empty() {
        return Err(EffectiveError::InvalidEditor {
            editor: editor.to_string(),
            source: None,
        });
    }

    let program = words.remove(0);
    let kind = EditorKind::from_program(&program);
    words.extend(kind.file_args(&path.display().to_string(), line));
    Ok(Command::new(program, words))
}

/// Line to open the editor at: the line after the first `steps:` key
///
/// Returns the 1-indexed line number two past the 0-indexed `steps:` line.
#[must_use]
pub fn first_step_line(content: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim() == "steps:")
        .map(|index| index + 2)
}

use crate::error::{NotesError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Represents the content parsed from an editor buffer.
/// Format: title\n\nbody
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub body: String,
}

impl EditorContent {
    pub fn new(title: String, body: String) -> Self {
        Self { title, body }
    }

    /// Formats the content for the editor buffer.
    pub fn to_buffer(&self) -> String {
        if self.body.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.body)
        }
    }

    /// Parses an editor buffer back into title and body.
    /// Format: first line is title, skip blank line, rest is body.
    pub fn from_buffer(buffer: &str) -> Self {
        let lines: Vec<&str> = buffer.lines().collect();

        if lines.is_empty() {
            return Self {
                title: String::new(),
                body: String::new(),
            };
        }

        let title = lines[0].to_string();

        let body = if lines.len() > 2 && lines[1].is_empty() {
            lines[2..].join("\n")
        } else if lines.len() > 1 && lines[1].is_empty() {
            String::new()
        } else if lines.len() > 1 {
            // No blank line separator, treat rest as body
            lines[1..].join("\n")
        } else {
            String::new()
        };

        Self { title, body }
    }
}

/// Gets the editor command.
/// Checks the config override, then $EDITOR, then $VISUAL, then falls
/// back to common editors.
pub fn get_editor(config_override: Option<&str>) -> Result<String> {
    if let Some(editor) = config_override {
        if !editor.is_empty() {
            return Ok(editor.to_string());
        }
    }

    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    // Try common fallbacks
    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(NotesError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P, config_override: Option<&str>) -> Result<String> {
    let editor = get_editor(config_override)?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| NotesError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(NotesError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(NotesError::Io)
}

/// Opens an editor prefilled with `initial` and returns the edited
/// content.
pub fn edit_note(initial: &EditorContent, config_override: Option<&str>) -> Result<EditorContent> {
    let temp_dir = env::temp_dir();
    let temp_file = temp_dir.join("pixelnotes_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(NotesError::Io)?;

    let result = open_in_editor(&temp_file, config_override)?;

    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result))
}

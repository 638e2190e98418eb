use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for pixelnotes, stored as config.json in the data
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Editor command for `new` and `edit`; overrides $EDITOR/$VISUAL
    #[serde(default)]
    pub editor: Option<String>,

    /// Show "3 minutes ago" style dates in listings instead of
    /// absolute timestamps
    #[serde(default = "default_relative_times")]
    pub relative_times: bool,
}

fn default_relative_times() -> bool {
    true
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            editor: None,
            relative_times: default_relative_times(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(config_path, content).map_err(NotesError::Io)?;
        Ok(())
    }

    /// Value of a config key as shown by `config KEY`
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "editor" => Ok(self.editor.clone().unwrap_or_default()),
            "relative-times" => Ok(self.relative_times.to_string()),
            other => Err(NotesError::Api(format!("Unknown config key: {}", other))),
        }
    }

    /// Set a config key from its `config KEY VALUE` string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor" => {
                self.editor = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
                Ok(())
            }
            "relative-times" => {
                self.relative_times = value.parse().map_err(|_| {
                    NotesError::Api(format!("Expected true or false, got: {}", value))
                })?;
                Ok(())
            }
            other => Err(NotesError::Api(format!("Unknown config key: {}", other))),
        }
    }
}

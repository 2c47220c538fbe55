//! Core data types for editor integration

use std::path::PathBuf;

use copcomplete_completion::{Position, SourceScope};
use copcomplete_process::RunnerOptions;
use serde::{Deserialize, Serialize};

/// Plugin settings
///
/// Loaded once and handed to each component at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Diagnostic logging
    pub debug: bool,
    /// RuboCop executable
    pub rubocop_command: String,
    /// Use the bundler wrapper when `Gemfile.lock` exists
    pub bundler: bool,
    /// Bundler executable
    pub bundler_command: String,
    /// Append `--server` to RuboCop invocations
    pub server: bool,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
    /// Kill RuboCop after this many seconds
    pub timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            rubocop_command: "rubocop".to_string(),
            bundler: true,
            bundler_command: "bundle".to_string(),
            server: false,
            cache_dir: None,
            timeout_secs: None,
        }
    }
}

impl Settings {
    /// Process runner options derived from these settings
    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            rubocop_command: self.rubocop_command.clone(),
            bundler: self.bundler,
            bundler_command: self.bundler_command.clone(),
            server: self.server,
            timeout: self.timeout_secs.map(std::time::Duration::from_secs),
        }
    }
}

/// Completion request parameters from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionParams {
    /// Path of the file being edited
    pub file_path: PathBuf,
    /// Full document text
    pub document: String,
    /// Cursor position
    pub position: Position,
    /// Regions reported by the host; detected from the file when absent
    #[serde(default)]
    pub scope: Option<SourceScope>,
    /// Folders open in the window
    #[serde(default)]
    pub folders: Vec<PathBuf>,
}

/// Shape the host expects completions in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostFlavor {
    /// Rich items with kind, annotation and details
    #[default]
    Modern,
    /// `[trigger, contents]` pairs
    Legacy,
}

/// Editor lifecycle notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The plugin was (re)loaded
    PluginLoaded,
    /// A file was saved
    PostSave { file_path: PathBuf, folders: Vec<PathBuf> },
    /// A window was opened
    NewWindow { folders: Vec<PathBuf> },
    /// A window command is about to run
    WindowCommand { command: String, folders: Vec<PathBuf> },
    /// A window is about to close
    PreCloseWindow { folders: Vec<PathBuf> },
}

/// What an event caused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// The cache was cleared
    ClearedCache,
    /// Server start (or restart) was requested
    StartedServer,
    /// Server stop was requested
    StoppedServer,
    /// Nothing to do
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.debug);
        assert!(settings.bundler);
        assert_eq!(settings.rubocop_command, "rubocop");
        assert_eq!(settings.bundler_command, "bundle");
        assert!(settings.runner_options().timeout.is_none());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = serde_yaml::from_str("server: true\ntimeout_secs: 5\n").unwrap();
        assert!(settings.server);
        assert!(settings.bundler);

        let options = settings.runner_options();
        assert!(options.server);
        assert_eq!(options.timeout, Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn test_event_wire_format() {
        let event: EditorEvent = serde_json::from_str(
            r#"{"event":"window_command","command":"close_window","folders":["/app"]}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            EditorEvent::WindowCommand {
                command: "close_window".to_string(),
                folders: vec![PathBuf::from("/app")],
            }
        );
    }
}

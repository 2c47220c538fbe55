//! Window commands exposed to the editor

use serde::{Deserialize, Serialize};

/// A command run from the editor's command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PluginCommand {
    /// Remove every cached registry
    ClearCache,
    /// Start the RuboCop server in each open folder
    StartServer,
    /// Stop the RuboCop server in each open folder
    StopServer,
}

impl PluginCommand {
    /// Command name as the editor knows it
    pub fn name(&self) -> &'static str {
        match self {
            PluginCommand::ClearCache => "rubocop_clear_cache",
            PluginCommand::StartServer => "rubocop_start_server",
            PluginCommand::StopServer => "rubocop_stop_server",
        }
    }
}

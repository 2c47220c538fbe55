//! Editor event bindings

use std::path::Path;

use async_trait::async_trait;

use crate::error::IdeResult;
use crate::types::{EditorEvent, EventAction};
use copcomplete_process::CONFIG_FILE;

/// Window command that closes the window
pub const CLOSE_WINDOW: &str = "close_window";

/// Receives editor lifecycle notifications
#[async_trait]
pub trait EditorEventHandler: Send + Sync {
    /// React to `event`, reporting what was done
    async fn handle_event(&self, event: &EditorEvent) -> IdeResult<EventAction>;
}

/// What `event` calls for, without performing it
pub fn planned_action(event: &EditorEvent) -> EventAction {
    match event {
        EditorEvent::PluginLoaded => EventAction::ClearedCache,
        EditorEvent::PostSave { file_path, .. } if is_config_file(file_path) => {
            EventAction::StartedServer
        }
        EditorEvent::PostSave { .. } => EventAction::Ignored,
        EditorEvent::NewWindow { .. } => EventAction::StartedServer,
        EditorEvent::WindowCommand { command, .. } if command == CLOSE_WINDOW => {
            EventAction::StoppedServer
        }
        EditorEvent::WindowCommand { .. } => EventAction::Ignored,
        EditorEvent::PreCloseWindow { .. } => EventAction::StoppedServer,
    }
}

fn is_config_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == CONFIG_FILE)
}

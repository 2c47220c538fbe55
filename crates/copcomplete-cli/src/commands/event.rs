// Deliver an editor event

use std::sync::Arc;

use copcomplete_ide::{EditorEvent, EditorEventHandler, IdeIntegrationManager};

use super::Command;
use crate::error::{CliError, CliResult};

/// Dispatch an editor lifecycle event given as JSON
pub struct EventCommand {
    manager: Arc<IdeIntegrationManager>,
    payload: String,
}

impl EventCommand {
    pub fn new(manager: Arc<IdeIntegrationManager>, payload: String) -> Self {
        Self { manager, payload }
    }

    /// Decode the event payload
    pub fn event(&self) -> CliResult<EditorEvent> {
        serde_json::from_str(&self.payload).map_err(|e| CliError::InvalidArgument {
            message: format!("malformed event: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl Command for EventCommand {
    async fn execute(&self) -> CliResult<()> {
        let event = self.event()?;
        let action = self.manager.handle_event(&event).await?;
        println!("{}", serde_json::json!({ "action": format!("{:?}", action) }));
        Ok(())
    }
}

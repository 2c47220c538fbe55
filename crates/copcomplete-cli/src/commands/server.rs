// Start or stop the RuboCop server

use std::path::PathBuf;
use std::sync::Arc;

use copcomplete_ide::{IdeIntegrationManager, PluginCommand};

use super::Command;
use crate::error::{CliError, CliResult};
use crate::output;

/// Server operation to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
}

impl ServerAction {
    fn plugin_command(self) -> PluginCommand {
        match self {
            ServerAction::Start => PluginCommand::StartServer,
            ServerAction::Stop => PluginCommand::StopServer,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            ServerAction::Start => "started",
            ServerAction::Stop => "stopped",
        }
    }
}

/// Run a server command in each folder
pub struct ServerCommand {
    manager: Arc<IdeIntegrationManager>,
    action: ServerAction,
    folders: Vec<PathBuf>,
}

impl ServerCommand {
    pub fn new(manager: Arc<IdeIntegrationManager>, action: ServerAction, folders: Vec<PathBuf>) -> Self {
        Self {
            manager,
            action,
            folders,
        }
    }
}

#[async_trait::async_trait]
impl Command for ServerCommand {
    async fn execute(&self) -> CliResult<()> {
        if self.folders.is_empty() {
            return Err(CliError::InvalidArgument {
                message: "at least one folder is required".to_string(),
            });
        }

        let outputs = self
            .manager
            .execute_command(&self.action.plugin_command(), &self.folders)
            .await?;

        for (folder, result) in self.folders.iter().zip(outputs) {
            if result.success {
                output::print_success(&format!("Server {} in {}", self.action.verb(), folder.display()));
            } else {
                output::print_warning(&format!(
                    "Server not {} in {} (no .rubocop.yml, or RuboCop reported an error)",
                    self.action.verb(),
                    folder.display()
                ));
            }
        }

        Ok(())
    }
}

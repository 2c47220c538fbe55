// Clear the registry cache

use std::sync::Arc;

use copcomplete_ide::{IdeIntegrationManager, PluginCommand};

use super::Command;
use crate::error::CliResult;
use crate::output;

/// Remove every cached registry
pub struct ClearCacheCommand {
    manager: Arc<IdeIntegrationManager>,
}

impl ClearCacheCommand {
    pub fn new(manager: Arc<IdeIntegrationManager>) -> Self {
        Self { manager }
    }
}

#[async_trait::async_trait]
impl Command for ClearCacheCommand {
    async fn execute(&self) -> CliResult<()> {
        self.manager
            .execute_command(&PluginCommand::ClearCache, &[])
            .await?;
        output::print_success("Cache cleared");
        Ok(())
    }
}

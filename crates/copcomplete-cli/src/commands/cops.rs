// Print the cop registry for a project

use std::path::PathBuf;
use std::sync::Arc;

use copcomplete_ide::IdeIntegrationManager;

use super::Command;
use crate::error::CliResult;
use crate::output;

/// Print the decoded (and cached) registry of a folder as JSON
pub struct CopsCommand {
    manager: Arc<IdeIntegrationManager>,
    folder: PathBuf,
}

impl CopsCommand {
    pub fn new(manager: Arc<IdeIntegrationManager>, folder: PathBuf) -> Self {
        Self { manager, folder }
    }
}

#[async_trait::async_trait]
impl Command for CopsCommand {
    async fn execute(&self) -> CliResult<()> {
        let registry = self.manager.registry_for(Some(&self.folder)).await;

        if registry.is_empty() {
            output::print_warning(&format!(
                "No cops found for '{}'. Is there a .rubocop.yml and does RuboCop run there?",
                self.folder.display()
            ));
        }

        println!("{}", serde_json::to_string_pretty(&registry)?);
        Ok(())
    }
}

//! Editor integration manager

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use copcomplete_cache::Cache;
use copcomplete_completion::{
    CompletionEngine, CompletionList, CompletionRequest, Registry, RegistryLoader, SourceScope,
};
use copcomplete_process::{RubocopRunner, ToolOutput, ToolRunner, RESTART_SERVER, STOP_SERVER};
use tracing::{debug, info};

use crate::{
    commands::PluginCommand,
    config::ConfigManager,
    error::{IdeError, IdeResult},
    events::{planned_action, EditorEventHandler},
    scope::detect_scope,
    types::*,
};

/// Wires settings, the RuboCop runner, the registry cache and the completion
/// engine together for one editor session
pub struct IdeIntegrationManager {
    settings: Settings,
    runner: Arc<dyn ToolRunner>,
    loader: RegistryLoader,
    engine: CompletionEngine,
}

impl IdeIntegrationManager {
    /// Create a manager over an explicit runner and cache
    pub fn new(settings: Settings, runner: Arc<dyn ToolRunner>, cache: Cache) -> Self {
        IdeIntegrationManager {
            loader: RegistryLoader::new(runner.clone(), cache),
            settings,
            runner,
            engine: CompletionEngine::new(),
        }
    }

    /// Create a manager running the real RuboCop with an on-disk cache
    pub fn from_settings(settings: Settings) -> IdeResult<Self> {
        ConfigManager::validate_config(&settings)?;

        let cache_dir = ConfigManager::cache_dir(&settings)?;
        debug!(cache_dir = %cache_dir.display(), "using cache directory");

        let runner = Arc::new(RubocopRunner::new(settings.runner_options()));
        Ok(Self::new(settings, runner, Cache::on_disk(cache_dir)))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Registry loader, for direct access to the cache
    pub fn loader(&self) -> &RegistryLoader {
        &self.loader
    }

    /// Folder whose configuration governs `params`
    ///
    /// A single open folder wins; otherwise the directory of the file.
    pub fn root_dir(params: &CompletionParams) -> Option<PathBuf> {
        if let [folder] = params.folders.as_slice() {
            return Some(folder.clone());
        }

        params.file_path.parent().map(|parent| {
            if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            }
        })
    }

    /// Registry for `root`, loading it on a cache miss
    pub async fn registry_for(&self, root: Option<&Path>) -> Registry {
        self.loader.load(root).await
    }

    /// Handle completion request
    pub async fn handle_completion_request(
        &self,
        params: &CompletionParams,
    ) -> IdeResult<CompletionList> {
        if params.file_path.as_os_str().is_empty() {
            return Err(IdeError::invalid_request(
                "File path parameter is required for completion request",
            ));
        }

        let scope = params
            .scope
            .unwrap_or_else(|| detect_scope(&params.file_path, &params.document, params.position));

        if scope == SourceScope::none() {
            debug!(file = %params.file_path.display(), "cursor is in no completable region");
            return Ok(CompletionList::empty());
        }

        let root = Self::root_dir(params);
        debug!(root = ?root, scope = ?scope, "handling completion request");

        let registry = self.registry_for(root.as_deref()).await;
        let request = CompletionRequest::new(params.document.clone(), params.position, scope);

        Ok(self.engine.complete(&request, &registry))
    }

    /// Remove every cached registry
    pub async fn clear_cache(&self) -> IdeResult<()> {
        self.loader.cache().clear().await?;
        info!("cleared registry cache");
        Ok(())
    }

    /// Start the RuboCop server in each folder
    ///
    /// Always sends `--restart-server`, which also starts a server that is
    /// not running yet and picks up configuration changes on one that is.
    pub async fn start_server(&self, folders: &[PathBuf]) -> Vec<ToolOutput> {
        self.run_in_each(RESTART_SERVER, folders).await
    }

    /// Stop the RuboCop server in each folder
    pub async fn stop_server(&self, folders: &[PathBuf]) -> Vec<ToolOutput> {
        self.run_in_each(STOP_SERVER, folders).await
    }

    /// Run a window command over the open folders
    pub async fn execute_command(
        &self,
        command: &PluginCommand,
        folders: &[PathBuf],
    ) -> IdeResult<Vec<ToolOutput>> {
        debug!(command = command.name(), folders = folders.len(), "executing command");

        match command {
            PluginCommand::ClearCache => {
                self.clear_cache().await?;
                Ok(Vec::new())
            }
            PluginCommand::StartServer => Ok(self.start_server(folders).await),
            PluginCommand::StopServer => Ok(self.stop_server(folders).await),
        }
    }

    async fn run_in_each(&self, flag: &str, folders: &[PathBuf]) -> Vec<ToolOutput> {
        let mut outputs = Vec::with_capacity(folders.len());
        for folder in folders {
            let output = self.runner.run(&[flag], Some(folder)).await;
            debug!(folder = %folder.display(), flag, success = output.success, "server command finished");
            outputs.push(output);
        }
        outputs
    }
}

#[async_trait]
impl EditorEventHandler for IdeIntegrationManager {
    async fn handle_event(&self, event: &EditorEvent) -> IdeResult<EventAction> {
        let action = planned_action(event);
        debug!(event = ?event, action = ?action, "editor event");

        match (event, action) {
            (_, EventAction::ClearedCache) => self.clear_cache().await?,
            (
                EditorEvent::PostSave { folders, .. } | EditorEvent::NewWindow { folders },
                EventAction::StartedServer,
            ) => {
                self.start_server(folders).await;
            }
            (
                EditorEvent::WindowCommand { folders, .. } | EditorEvent::PreCloseWindow { folders },
                EventAction::StoppedServer,
            ) => {
                self.stop_server(folders).await;
            }
            _ => {}
        }

        Ok(action)
    }
}

// Answer one completion request

use std::path::PathBuf;
use std::sync::Arc;

use clap::ValueEnum;
use copcomplete_completion::{Position, SourceScope};
use copcomplete_ide::{CompletionParams, HostFlavor, IdeIntegrationManager, ResponseFormatter};
use tokio::io::AsyncReadExt;
use tracing::debug;

use super::Command;
use crate::error::{CliError, CliResult};

/// Region the cursor is in, as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Detect from the file name and the text before the cursor
    Auto,
    /// RuboCop configuration file
    Config,
    /// Ruby comment
    Comment,
    /// Both regions at once
    Both,
}

impl ScopeArg {
    /// Scope to report, or `None` to detect it
    pub fn to_scope(self) -> Option<SourceScope> {
        match self {
            ScopeArg::Auto => None,
            ScopeArg::Config => Some(SourceScope::config()),
            ScopeArg::Comment => Some(SourceScope::comment()),
            ScopeArg::Both => Some(SourceScope {
                structured_config: true,
                script_comment: true,
            }),
        }
    }
}

/// Print completions for a cursor position as JSON
pub struct CompleteCommand {
    manager: Arc<IdeIntegrationManager>,
    file: PathBuf,
    line: usize,
    column: usize,
    document: Option<PathBuf>,
    scope: ScopeArg,
    folders: Vec<PathBuf>,
    flavor: HostFlavor,
}

impl CompleteCommand {
    pub fn new(manager: Arc<IdeIntegrationManager>, file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            manager,
            file,
            line,
            column,
            document: None,
            scope: ScopeArg::Auto,
            folders: Vec::new(),
            flavor: HostFlavor::Modern,
        }
    }

    /// Read the document from `path` instead of the file (`-` for stdin)
    pub fn with_document(mut self, path: Option<PathBuf>) -> Self {
        self.document = path;
        self
    }

    pub fn with_scope(mut self, scope: ScopeArg) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_folders(mut self, folders: Vec<PathBuf>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_flavor(mut self, flavor: HostFlavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Request parameters for `document`
    pub fn params(&self, document: String) -> CompletionParams {
        CompletionParams {
            file_path: self.file.clone(),
            document,
            position: Position::new(self.line, self.column),
            scope: self.scope.to_scope(),
            folders: self.folders.clone(),
        }
    }

    async fn read_document(&self) -> CliResult<String> {
        let source = self.document.as_ref().unwrap_or(&self.file);

        if source.as_os_str() == "-" {
            let mut document = String::new();
            tokio::io::stdin().read_to_string(&mut document).await?;
            return Ok(document);
        }

        match tokio::fs::read_to_string(source).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.document.is_none() => {
                debug!(file = %source.display(), "file does not exist yet, completing an empty document");
                Ok(String::new())
            }
            Err(e) => Err(CliError::InvalidArgument {
                message: format!("cannot read '{}': {}", source.display(), e),
            }),
        }
    }
}

#[async_trait::async_trait]
impl Command for CompleteCommand {
    async fn execute(&self) -> CliResult<()> {
        let document = self.read_document().await?;
        let list = self
            .manager
            .handle_completion_request(&self.params(document))
            .await?;

        let response = ResponseFormatter::format_completions(&list, self.flavor);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}

// Command routing and dispatch

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use copcomplete_ide::{ConfigManager, HostFlavor, IdeIntegrationManager, Settings};
use tracing::debug;

use crate::commands::*;
use crate::error::CliResult;

/// copcomplete - RuboCop cop completion for editors
#[derive(Parser, Debug)]
#[command(name = "copcomplete")]
#[command(bin_name = "copcomplete")]
#[command(about = "RuboCop cop completion for editors")]
#[command(
    long_about = "copcomplete completes RuboCop cop names, attributes and EnforcedStyle values in .rubocop.yml files, \
                  and cop names after `# rubocop:disable` in Ruby comments.\n\n\
                  The cop list comes from `rubocop --show-cops` and is cached per project until .rubocop.yml or Gemfile.lock change."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (.yml, .yaml or .json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<String>,

    /// Enable diagnostic logging on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print completions for a cursor position
    #[command(about = "Print completions for a cursor position as JSON")]
    Complete {
        /// File being edited
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based cursor line
        #[arg(long, default_value_t = 0)]
        line: usize,

        /// Zero-based cursor column, in characters
        #[arg(long, default_value_t = 0)]
        column: usize,

        /// Read the document text from here instead of FILE (`-` for stdin)
        #[arg(long, value_name = "PATH")]
        document: Option<PathBuf>,

        /// Region the cursor is in
        #[arg(long, value_enum, default_value_t = ScopeArg::Auto)]
        scope: ScopeArg,

        /// Folder open in the editor window (repeatable)
        #[arg(long = "folder", value_name = "DIR")]
        folders: Vec<PathBuf>,

        /// Emit `[trigger, contents]` pairs for older hosts
        #[arg(long)]
        legacy: bool,
    },

    /// Print the cop registry of a project
    #[command(about = "Print the cop registry of a project as JSON")]
    Cops {
        /// Project folder (default: current directory)
        #[arg(value_name = "DIR", default_value = ".")]
        folder: PathBuf,
    },

    /// Remove every cached registry
    #[command(name = "clear-cache")]
    ClearCache,

    /// Start the RuboCop server in each folder
    #[command(name = "start-server")]
    StartServer {
        /// Folders to start the server in
        #[arg(value_name = "DIR", required = true)]
        folders: Vec<PathBuf>,
    },

    /// Stop the RuboCop server in each folder
    #[command(name = "stop-server")]
    StopServer {
        /// Folders to stop the server in
        #[arg(value_name = "DIR", required = true)]
        folders: Vec<PathBuf>,
    },

    /// Deliver an editor event given as JSON
    #[command(about = "Deliver an editor event, e.g. '{\"event\":\"new_window\",\"folders\":[\".\"]}'")]
    Event {
        /// Event payload
        #[arg(value_name = "JSON")]
        payload: String,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse arguments and execute the command
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();

        let settings = Self::settings(&cli).await?;
        crate::logging::init_logging(settings.debug)?;
        debug!(settings = ?settings, "loaded settings");

        Self::execute(&cli, settings).await
    }

    /// Settings from `--config`, with `--debug` applied on top
    pub async fn settings(cli: &Cli) -> CliResult<Settings> {
        let mut settings = match &cli.config {
            Some(path) => ConfigManager::load_from_file(path).await?,
            None => Settings::default(),
        };

        if cli.debug {
            settings.debug = true;
        }

        Ok(settings)
    }

    /// Execute a command
    pub async fn execute(cli: &Cli, settings: Settings) -> CliResult<()> {
        let manager = Arc::new(IdeIntegrationManager::from_settings(settings)?);

        match &cli.command {
            Commands::Complete {
                file,
                line,
                column,
                document,
                scope,
                folders,
                legacy,
            } => {
                let flavor = if *legacy { HostFlavor::Legacy } else { HostFlavor::Modern };
                let cmd = CompleteCommand::new(manager, file.clone(), *line, *column)
                    .with_document(document.clone())
                    .with_scope(*scope)
                    .with_folders(folders.clone())
                    .with_flavor(flavor);
                cmd.execute().await
            }
            Commands::Cops { folder } => {
                let cmd = CopsCommand::new(manager, folder.clone());
                cmd.execute().await
            }
            Commands::ClearCache => {
                let cmd = ClearCacheCommand::new(manager);
                cmd.execute().await
            }
            Commands::StartServer { folders } => {
                let cmd = ServerCommand::new(manager, ServerAction::Start, folders.clone());
                cmd.execute().await
            }
            Commands::StopServer { folders } => {
                let cmd = ServerCommand::new(manager, ServerAction::Stop, folders.clone());
                cmd.execute().await
            }
            Commands::Event { payload } => {
                let cmd = EventCommand::new(manager, payload.clone());
                cmd.execute().await
            }
        }
    }
}

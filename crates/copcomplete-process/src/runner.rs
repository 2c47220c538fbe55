//! RuboCop invocation
//!
//! Builds the RuboCop command line for a project folder (optionally through
//! `bundle exec`, optionally in server mode) and reduces the result to the
//! `(success, stdout)` pair the rest of copcomplete works with.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::{config::ProcessConfig, error::Result, manager::ProcessManager};

/// Project configuration file; its presence enables RuboCop for a folder
pub const CONFIG_FILE: &str = ".rubocop.yml";

/// Bundler lockfile; its presence enables the bundler wrapper
pub const LOCK_FILE: &str = "Gemfile.lock";

/// Print the cop catalogue as YAML
pub const SHOW_COPS: &str = "--show-cops";
/// (Re)start the RuboCop server; also used for the first start
pub const RESTART_SERVER: &str = "--restart-server";
/// Stop the RuboCop server
pub const STOP_SERVER: &str = "--stop-server";
/// Route the invocation through a running server
pub const SERVER: &str = "--server";

const SERVER_CONTROL: [&str; 2] = [RESTART_SERVER, STOP_SERVER];

/// How RuboCop is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    /// RuboCop executable
    pub rubocop_command: String,
    /// Use the bundler wrapper when the lockfile exists
    pub bundler: bool,
    /// Bundler executable
    pub bundler_command: String,
    /// Inject `--server` into non server-control invocations
    pub server: bool,
    /// Kill RuboCop after this long (None = wait forever)
    pub timeout: Option<Duration>,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            rubocop_command: "rubocop".to_string(),
            bundler: true,
            bundler_command: "bundle".to_string(),
            server: false,
            timeout: None,
        }
    }
}

/// Result of a RuboCop invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Nothing was written to stderr
    pub success: bool,
    /// Raw stdout
    pub stdout: Vec<u8>,
}

impl ToolOutput {
    /// The invocation was not attempted
    pub fn skipped() -> Self {
        Self::default()
    }
}

/// Something that can run RuboCop against a project folder
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Run with `args` inside `folder`
    ///
    /// Never fails: a missing folder, a folder without `.rubocop.yml`, a spawn
    /// failure or output on stderr all come back as an unsuccessful
    /// [`ToolOutput`].
    async fn run(&self, args: &[&str], folder: Option<&Path>) -> ToolOutput;
}

/// Runs the real RuboCop executable
#[derive(Debug, Clone, Default)]
pub struct RubocopRunner {
    options: RunnerOptions,
    manager: ProcessManager,
}

impl RubocopRunner {
    /// Create a runner with the given options
    pub fn new(options: RunnerOptions) -> Self {
        Self {
            options,
            manager: ProcessManager::new(),
        }
    }

    /// Runner options
    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Build the process configuration for `args` in `folder`
    pub fn command_for(&self, args: &[&str], folder: &Path) -> ProcessConfig {
        let opts = &self.options;

        let mut config = if opts.bundler && folder.join(LOCK_FILE).is_file() {
            ProcessConfig::new(&opts.bundler_command).args(["exec", "rubocop"])
        } else {
            ProcessConfig::new(&opts.rubocop_command)
        };

        for arg in args {
            config = config.arg(*arg);
        }

        if opts.server && !args.iter().any(|arg| SERVER_CONTROL.contains(arg)) {
            config = config.arg(SERVER);
        }

        config.working_dir(folder).timeout(opts.timeout)
    }

    /// Run RuboCop, surfacing spawn and timeout errors
    ///
    /// Returns `Ok(None)` when the folder does not qualify for a run.
    pub async fn try_run(&self, args: &[&str], folder: Option<&Path>) -> Result<Option<ToolOutput>> {
        let Some(folder) = folder else {
            debug!("no folder provided, skipping rubocop");
            return Ok(None);
        };

        if !folder.join(CONFIG_FILE).is_file() {
            debug!(folder = %folder.display(), "no {} found, skipping rubocop", CONFIG_FILE);
            return Ok(None);
        }

        let config = self.command_for(args, folder);
        debug!(command = ?config.command_line(), folder = %folder.display(), "running rubocop");

        let output = self.manager.run(config).await?;
        let success = output.succeeded();
        if !success {
            debug!(stderr = %String::from_utf8_lossy(&output.stderr), "rubocop wrote to stderr");
        }

        Ok(Some(ToolOutput {
            success,
            stdout: output.stdout,
        }))
    }
}

#[async_trait]
impl ToolRunner for RubocopRunner {
    async fn run(&self, args: &[&str], folder: Option<&Path>) -> ToolOutput {
        match self.try_run(args, folder).await {
            Ok(Some(output)) => output,
            Ok(None) => ToolOutput::skipped(),
            Err(e) => {
                debug!(error = %e, "rubocop invocation failed");
                ToolOutput::skipped()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(with_lock: bool) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "AllCops:\n  NewCops: enable\n").unwrap();
        if with_lock {
            fs::write(dir.path().join(LOCK_FILE), "GEM\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_plain_command() {
        let dir = project(false);
        let runner = RubocopRunner::new(RunnerOptions::default());

        let config = runner.command_for(&[SHOW_COPS], dir.path());
        assert_eq!(config.command_line(), vec!["rubocop", "--show-cops"]);
        assert_eq!(config.working_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_bundler_wrapper_needs_lockfile() {
        let runner = RubocopRunner::new(RunnerOptions {
            bundler_command: "/usr/local/bin/bundle".to_string(),
            ..RunnerOptions::default()
        });

        let with_lock = project(true);
        let config = runner.command_for(&[SHOW_COPS], with_lock.path());
        assert_eq!(
            config.command_line(),
            vec!["/usr/local/bin/bundle", "exec", "rubocop", "--show-cops"]
        );

        let without_lock = project(false);
        let config = runner.command_for(&[SHOW_COPS], without_lock.path());
        assert_eq!(config.command_line(), vec!["rubocop", "--show-cops"]);
    }

    #[test]
    fn test_bundler_disabled() {
        let dir = project(true);
        let runner = RubocopRunner::new(RunnerOptions {
            bundler: false,
            ..RunnerOptions::default()
        });

        let config = runner.command_for(&[SHOW_COPS], dir.path());
        assert_eq!(config.command_line(), vec!["rubocop", "--show-cops"]);
    }

    #[test]
    fn test_server_flag_injection() {
        let dir = project(false);
        let runner = RubocopRunner::new(RunnerOptions {
            server: true,
            ..RunnerOptions::default()
        });

        let config = runner.command_for(&[SHOW_COPS], dir.path());
        assert_eq!(config.command_line(), vec!["rubocop", "--show-cops", "--server"]);

        for control in SERVER_CONTROL {
            let config = runner.command_for(&[control], dir.path());
            assert_eq!(config.command_line(), vec!["rubocop", control]);
        }
    }

    #[tokio::test]
    async fn test_skips_without_folder() {
        let runner = RubocopRunner::default();
        assert_eq!(runner.run(&[SHOW_COPS], None).await, ToolOutput::skipped());
    }

    #[tokio::test]
    async fn test_skips_without_config_file() {
        let dir = TempDir::new().unwrap();
        let runner = RubocopRunner::new(RunnerOptions {
            rubocop_command: "echo".to_string(),
            ..RunnerOptions::default()
        });

        let result = runner.try_run(&[SHOW_COPS], Some(dir.path())).await.unwrap();
        assert!(result.is_none());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_runs_configured_command() {
        let dir = project(false);
        let runner = RubocopRunner::new(RunnerOptions {
            rubocop_command: "echo".to_string(),
            ..RunnerOptions::default()
        });

        let output = runner.run(&[SHOW_COPS], Some(dir.path())).await;
        assert!(output.success);
        assert_eq!(output.stdout, b"--show-cops\n");
    }

    #[tokio::test]
    async fn test_spawn_failure_degrades() {
        let dir = project(false);
        let runner = RubocopRunner::new(RunnerOptions {
            rubocop_command: "copcomplete-no-such-rubocop".to_string(),
            ..RunnerOptions::default()
        });

        let output = runner.run(&[SHOW_COPS], Some(dir.path())).await;
        assert!(!output.success);
        assert!(output.stdout.is_empty());
    }
}

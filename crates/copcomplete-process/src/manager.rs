//! Process manager - spawning and output collection

use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::{
    child::{ManagedChild, ProcessOutput},
    config::ProcessConfig,
    error::{ProcessError, Result},
};

/// Spawns processes described by a [`ProcessConfig`]
#[derive(Debug, Clone, Copy)]
pub struct ProcessManager;

impl ProcessManager {
    /// Create new process manager
    pub fn new() -> Self {
        Self
    }

    /// Spawn a managed process with stdout and stderr piped
    ///
    /// The working directory is handed to the spawn call; the current
    /// directory of this process is never changed.
    pub async fn spawn(&self, config: ProcessConfig) -> Result<ManagedChild> {
        if config.command.is_empty() {
            return Err(ProcessError::InvalidConfig("empty command".to_string()));
        }

        debug!(
            command = %config.command,
            args = ?config.args,
            cwd = ?config.working_dir,
            "Spawning process"
        );

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args);

        if let Some(ref dir) = config.working_dir {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn()?;
        Ok(ManagedChild::new(child, &config))
    }

    /// Spawn a process and wait for its output
    pub async fn run(&self, config: ProcessConfig) -> Result<ProcessOutput> {
        self.spawn(config).await?.wait_with_output().await
    }
}

impl Default for ProcessManager {
    fn default() -> Self {
        Self::new()
    }
}

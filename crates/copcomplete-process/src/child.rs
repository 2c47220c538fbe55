//! Managed child process wrapper

use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::Child;
use tracing::debug;

use crate::{
    config::ProcessConfig,
    error::{ProcessError, Result},
};

/// Everything a finished process left behind
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit status as reported by the OS
    pub status: ExitStatus,
    /// Captured stdout
    pub stdout: Vec<u8>,
    /// Captured stderr
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Whether the run counts as successful.
    ///
    /// RuboCop reports configuration problems and crashes on stderr while
    /// still exiting 0, and exits 1 whenever it finds offences. The exit
    /// status is therefore ignored: a run succeeded iff stderr is empty.
    pub fn succeeded(&self) -> bool {
        self.stderr.is_empty()
    }
}

/// Wrapper around tokio::process::Child
pub struct ManagedChild {
    child: Child,
    timeout: Option<Duration>,
    pid: u32,
}

impl ManagedChild {
    /// Create new managed child
    pub(crate) fn new(child: Child, config: &ProcessConfig) -> Self {
        let pid = child.id().unwrap_or(0);
        Self {
            child,
            timeout: config.timeout,
            pid,
        }
    }

    /// Wait for the process to exit and collect its output
    ///
    /// Honours the configured timeout. On timeout the child is dropped,
    /// which kills it (the manager spawns with `kill_on_drop`).
    pub async fn wait_with_output(self) -> Result<ProcessOutput> {
        let pid = self.pid;
        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.child.wait_with_output())
                .await
                .map_err(|_| ProcessError::Timeout {
                    seconds: timeout.as_secs(),
                })??,
            None => self.child.wait_with_output().await?,
        };

        debug!(
            pid = %pid,
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Process exited"
        );

        Ok(ProcessOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

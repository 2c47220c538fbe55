//! Process configuration

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for spawning a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Executable command
    pub command: String,
    /// Command arguments
    pub args: Vec<String>,
    /// Working directory (None = inherit)
    pub working_dir: Option<PathBuf>,
    /// Timeout for process execution (None = wait forever)
    pub timeout: Option<Duration>,
}

impl ProcessConfig {
    /// Create new process configuration
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: vec![],
            working_dir: None,
            timeout: None,
        }
    }

    /// Set command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set timeout duration
    pub fn timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    /// Full command line, for logging
    pub fn command_line(&self) -> Vec<&str> {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

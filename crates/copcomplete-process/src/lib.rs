//! # copcomplete-process
//!
//! **Purpose**: Run RuboCop for a project folder and capture what it printed
//!
//! ## Features
//!
//! - **Process Spawning**: Async process creation with captured stdout/stderr
//! - **Explicit Working Directory**: Passed to the spawn call, never `chdir`
//! - **Optional Timeout**: Kill the child after a configured duration
//! - **RuboCop Command Line**: Bundler wrapper and server-mode flag injection
//! - **Stderr Success Semantics**: A run succeeds iff nothing hit stderr
//!
//! ## Usage
//!
//! ```rust,no_run
//! use copcomplete_process::{RubocopRunner, RunnerOptions, ToolRunner, SHOW_COPS};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let runner = RubocopRunner::new(RunnerOptions::default());
//! let output = runner.run(&[SHOW_COPS], Some(Path::new("/path/to/project"))).await;
//!
//! if output.success {
//!     println!("{}", String::from_utf8_lossy(&output.stdout));
//! }
//! # }
//! ```

pub mod child;
pub mod config;
pub mod error;
pub mod manager;
pub mod runner;

pub use child::{ManagedChild, ProcessOutput};
pub use config::ProcessConfig;
pub use error::{ProcessError, Result};
pub use manager::ProcessManager;
pub use runner::{
    RubocopRunner, RunnerOptions, ToolOutput, ToolRunner, CONFIG_FILE, LOCK_FILE,
    RESTART_SERVER, SERVER, SHOW_COPS, STOP_SERVER,
};

// Command handlers for the copcomplete CLI

pub mod cache;
pub mod complete;
pub mod cops;
pub mod event;
pub mod server;

pub use cache::ClearCacheCommand;
pub use complete::{CompleteCommand, ScopeArg};
pub use cops::CopsCommand;
pub use event::EventCommand;
pub use server::{ServerAction, ServerCommand};

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}

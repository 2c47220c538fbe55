//! Editor integration for copcomplete
//!
//! Binds editor lifecycle events and window commands to RuboCop server
//! control and cache maintenance, and turns host completion requests into
//! completion lists rendered for the host.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod manager;
pub mod response_formatter;
pub mod scope;
pub mod types;

pub use commands::PluginCommand;
pub use config::{ConfigManager, PathResolver, HOME_ENV};
pub use error::{IdeError, IdeResult};
pub use events::{planned_action, EditorEventHandler, CLOSE_WINDOW};
pub use manager::IdeIntegrationManager;
pub use response_formatter::ResponseFormatter;
pub use scope::{detect_scope, is_rubocop_config, is_ruby_source};
pub use types::*;
